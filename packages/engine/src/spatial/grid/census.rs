use serde::Serialize;

use super::*;

/// Per-kind cell counts and the summed water depth of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Census {
    pub empty: u32,
    pub water: u32,
    pub terrain: u32,
    pub dam: u32,
    pub flooded: u32,
    pub total_depth: f64,
}

impl Census {
    pub fn wet_cells(&self) -> u32 {
        self.water + self.flooded
    }
}

impl Grid {
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for (kind, &depth) in self.kinds.iter().zip(self.depth.iter()) {
            match kind {
                CellKind::Empty => census.empty += 1,
                CellKind::Water => census.water += 1,
                CellKind::Terrain => census.terrain += 1,
                CellKind::Dam => census.dam += 1,
                CellKind::FloodedTerrain => census.flooded += 1,
            }
            if kind.holds_water() {
                census.total_depth += depth as f64;
            }
        }
        census
    }
}
