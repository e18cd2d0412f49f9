//! Von Neumann adjacency
//!
//! Off-grid neighbours are simply absent. A centre that is itself off the grid
//! has no neighbours at all.

use super::*;

/// Offsets in evaluation order: up, down, left, right.
pub const VON_NEUMANN: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Up to four wet neighbour indices, without allocating.
#[derive(Clone, Copy, Debug, Default)]
pub struct WetNeighbors {
    cells: [usize; 4],
    len: usize,
}

impl WetNeighbors {
    #[inline]
    fn push(&mut self, idx: usize) {
        self.cells[self.len] = idx;
        self.len += 1;
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.cells[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Grid {
    /// In-bounds neighbour indices of (x, y), in stencil order.
    #[inline]
    pub fn neighbors(&self, x: i32, y: i32) -> impl Iterator<Item = usize> + '_ {
        let centre_ok = self.in_bounds(x, y);
        VON_NEUMANN
            .into_iter()
            .filter(move |_| centre_ok)
            .filter_map(move |(dx, dy)| self.checked_index(x + dx, y + dy))
    }

    /// Whether any neighbour is empty or flooded terrain.
    pub fn has_spreadable_neighbor(&self, x: i32, y: i32) -> bool {
        self.neighbors(x, y).any(|n| self.kinds[n].accepts_spread())
    }

    /// Neighbours holding water (water or flooded terrain).
    pub fn adjacent_water_cells(&self, x: i32, y: i32) -> WetNeighbors {
        let mut wet = WetNeighbors::default();
        for n in self.neighbors(x, y) {
            if self.kinds[n].holds_water() {
                wet.push(n);
            }
        }
        wet
    }

    /// True only when at least one wet neighbour exists and the shallowest of
    /// them is at least `threshold` deep.
    pub fn all_adjacent_water_at_least(&self, x: i32, y: i32, threshold: f32) -> bool {
        let wet = self.adjacent_water_cells(x, y);
        if wet.is_empty() {
            return false;
        }
        let shallowest = wet
            .as_slice()
            .iter()
            .map(|&n| self.depth[n])
            .fold(f32::INFINITY, f32::min);
        shallowest >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross(centre: CellKind, arms: CellKind, arm_depth: f32) -> Grid {
        let mut grid = Grid::new(3, 3);
        grid.fill(CellKind::Dam, 0.0);
        grid.set_cell(1, 1, centre, 0.0);
        for (x, y) in [(1, 0), (1, 2), (0, 1), (2, 1)] {
            grid.set_cell(x, y, arms, arm_depth);
        }
        grid
    }

    #[test]
    fn corner_has_two_neighbours_in_stencil_order() {
        let grid = Grid::new(3, 3);
        let ns: Vec<usize> = grid.neighbors(0, 0).collect();
        // down (0,1) then right (1,0)
        assert_eq!(ns, vec![3, 1]);
    }

    #[test]
    fn off_grid_centre_has_no_neighbours() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbors(-1, 0).count(), 0);
        assert_eq!(grid.neighbors(3, 1).count(), 0);
        assert!(!grid.has_spreadable_neighbor(-1, 1));
        assert!(grid.adjacent_water_cells(1, 7).is_empty());
    }

    #[test]
    fn spreadable_means_empty_or_flooded() {
        assert!(cross(CellKind::Water, CellKind::Empty, 0.0).has_spreadable_neighbor(1, 1));
        assert!(cross(CellKind::Water, CellKind::FloodedTerrain, 0.4).has_spreadable_neighbor(1, 1));
        assert!(!cross(CellKind::Water, CellKind::Terrain, 0.0).has_spreadable_neighbor(1, 1));
        assert!(!cross(CellKind::Water, CellKind::Water, 1.0).has_spreadable_neighbor(1, 1));
    }

    #[test]
    fn wet_neighbours_include_flooded_terrain() {
        let grid = cross(CellKind::Terrain, CellKind::FloodedTerrain, 0.5);
        assert_eq!(grid.adjacent_water_cells(1, 1).len(), 4);
        let grid = cross(CellKind::Terrain, CellKind::Dam, 0.0);
        assert!(grid.adjacent_water_cells(1, 1).is_empty());
    }

    #[test]
    fn threshold_needs_a_wet_neighbour_and_uses_the_minimum() {
        assert!(!cross(CellKind::Terrain, CellKind::Dam, 0.0)
            .all_adjacent_water_at_least(1, 1, 0.98));
        assert!(cross(CellKind::Terrain, CellKind::Water, 0.98)
            .all_adjacent_water_at_least(1, 1, 0.98));

        let mut grid = cross(CellKind::Terrain, CellKind::Water, 1.0);
        grid.set_depth(2, 1, 0.97);
        assert!(!grid.all_adjacent_water_at_least(1, 1, 0.98));
    }
}
