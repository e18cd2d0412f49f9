use wasm_bindgen::prelude::*;

use crate::systems::flood::StepTally;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) plan_ms: f64,
    pub(super) commit_ms: f64,
    pub(super) cells_processed: u32,
    pub(super) wet_cells: u32,
    pub(super) spreads: u32,
    pub(super) raises: u32,
    pub(super) conversions: u32,
    pub(super) bundled_conversions: u32,
    pub(super) writes: u32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_tally(&mut self, tally: &StepTally) {
        self.cells_processed = tally.cells_planned;
        self.wet_cells = tally.wet_cells;
        self.spreads = tally.spreads;
        self.raises = tally.raises;
        self.conversions = tally.conversions;
        self.bundled_conversions = tally.bundled;
        self.writes = tally.writes;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn plan_ms(&self) -> f64 { self.plan_ms }
    #[wasm_bindgen(getter)]
    pub fn commit_ms(&self) -> f64 { self.commit_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn wet_cells(&self) -> u32 { self.wet_cells }
    #[wasm_bindgen(getter)]
    pub fn spreads(&self) -> u32 { self.spreads }
    #[wasm_bindgen(getter)]
    pub fn raises(&self) -> u32 { self.raises }
    #[wasm_bindgen(getter)]
    pub fn conversions(&self) -> u32 { self.conversions }
    #[wasm_bindgen(getter)]
    pub fn bundled_conversions(&self) -> u32 { self.bundled_conversions }
    #[wasm_bindgen(getter)]
    pub fn writes(&self) -> u32 { self.writes }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
