use super::super::*;

impl Grid {
    // === Raw pointers for JS interop ===
    /// `CellKind` is `repr(u8)`, so the kind layer reads as plain bytes.
    pub fn kinds_ptr(&self) -> *const u8 {
        self.kinds.as_ptr() as *const u8
    }

    pub fn depth_ptr(&self) -> *const f32 {
        self.depth.as_ptr()
    }
}
