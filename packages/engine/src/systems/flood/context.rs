use rand_chacha::ChaCha8Rng;

use crate::domain::cells::CellKind;
use crate::domain::config::{FloodRules, FlowSpeed};
use crate::grid::Grid;

/// One deferred write into the next-tick buffers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellWrite {
    /// Replace kind and depth.
    Set { idx: usize, kind: CellKind, depth: f32 },
    /// Replace depth only.
    Depth { idx: usize, depth: f32 },
    /// Raise depth to at least `depth`; never lowers it.
    Raise { idx: usize, depth: f32 },
}

impl CellWrite {
    #[inline]
    pub fn index(&self) -> usize {
        match *self {
            CellWrite::Set { idx, .. } | CellWrite::Depth { idx, .. } | CellWrite::Raise { idx, .. } => idx,
        }
    }

    #[inline]
    pub(crate) fn apply(self, kinds: &mut [CellKind], depth: &mut [f32]) {
        match self {
            CellWrite::Set { idx, kind, depth: d } => {
                kinds[idx] = kind;
                depth[idx] = d;
            }
            CellWrite::Depth { idx, depth: d } => depth[idx] = d,
            CellWrite::Raise { idx, depth: d } => depth[idx] = depth[idx].max(d),
        }
    }
}

/// Counters gathered while planning a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepTally {
    /// Cells a rule looked at (wet cells and terrain).
    pub cells_planned: u32,
    pub wet_cells: u32,
    /// Empty cells turned to water.
    pub spreads: u32,
    /// Flooded cells whose depth was pushed up by a neighbour.
    pub raises: u32,
    /// Terrain cells that met the flood threshold themselves.
    pub conversions: u32,
    /// Terrain cells flooded alongside a converting neighbour.
    pub bundled: u32,
    pub writes: u32,
}

impl StepTally {
    pub fn merge(&mut self, other: &StepTally) {
        self.cells_planned += other.cells_planned;
        self.wet_cells += other.wet_cells;
        self.spreads += other.spreads;
        self.raises += other.raises;
        self.conversions += other.conversions;
        self.bundled += other.bundled;
        self.writes += other.writes;
    }
}

/// Planning context passed to rules (one per visited cell).
pub struct PlanContext<'a> {
    pub grid: &'a Grid,
    pub rules: &'a FloodRules,
    pub flow: FlowSpeed,
    pub x: u32,
    pub y: u32,
    pub idx: usize,
    pub rng: &'a mut ChaCha8Rng,
    pub writes: &'a mut Vec<CellWrite>,
    pub tally: &'a mut StepTally,
}

impl<'a> PlanContext<'a> {
    #[inline]
    pub fn kind(&self) -> CellKind {
        self.grid.kind_idx(self.idx)
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.grid.depth_idx(self.idx)
    }

    #[inline]
    pub fn pos(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    #[inline]
    pub fn push(&mut self, write: CellWrite) {
        self.writes.push(write);
    }
}
