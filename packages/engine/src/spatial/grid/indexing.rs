use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    /// Row-major index of (x, y).
    ///
    /// # Panics
    /// When (x, y) lies outside the grid, in every build profile. Use
    /// `checked_index` for coordinates that may be off the grid.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx % w) as u32, (idx / w) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.width as i64 && y >= 0 && (y as i64) < self.height as i64
    }

    /// Index of (x, y) if it lies inside the grid.
    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(self.index(x as u32, y as u32))
        } else {
            None
        }
    }
}
