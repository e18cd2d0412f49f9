use super::super::*;

impl Grid {
    // === Layer views ===
    #[inline]
    pub fn kinds(&self) -> &[CellKind] {
        &self.kinds
    }

    #[inline]
    pub fn depths(&self) -> &[f32] {
        &self.depth
    }

    // === Kind access ===
    #[inline]
    pub fn kind(&self, x: u32, y: u32) -> CellKind {
        self.kinds[self.index(x, y)]
    }

    /// Kind at signed coordinates; `None` off the grid.
    #[inline]
    pub fn kind_at(&self, x: i32, y: i32) -> Option<CellKind> {
        self.checked_index(x, y).map(|idx| self.kinds[idx])
    }

    #[inline]
    pub fn kind_idx(&self, idx: usize) -> CellKind {
        self.kinds[idx]
    }

    // === Depth access ===
    #[inline]
    pub fn depth(&self, x: u32, y: u32) -> f32 {
        self.depth[self.index(x, y)]
    }

    #[inline]
    pub fn depth_idx(&self, idx: usize) -> f32 {
        self.depth[idx]
    }

    // === Writes (editor and setup only; the engine writes whole layers) ===
    #[inline]
    pub fn set_cell(&mut self, x: u32, y: u32, kind: CellKind, depth: f32) {
        let idx = self.index(x, y);
        self.kinds[idx] = kind;
        self.depth[idx] = depth;
    }

    #[inline]
    pub fn set_depth(&mut self, x: u32, y: u32, depth: f32) {
        let idx = self.index(x, y);
        self.depth[idx] = depth;
    }

    /// Overwrite every cell with `kind` and `depth`.
    pub fn fill(&mut self, kind: CellKind, depth: f32) {
        self.kinds.fill(kind);
        self.depth.fill(depth);
    }
}
