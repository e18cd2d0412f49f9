//! Step driver - plan rows against the snapshot, then commit in row-major order
//!
//! Planning is read-only and each row owns its RNG stream, so rows are planned
//! in parallel when the `parallel` feature is on. Commit replays the writes in
//! row-major order into copies of the current layers:
//! - an empty cell targeted twice keeps the later spread
//! - raises on flooded terrain accumulate with `max`
//! - a wet cell's own diffusion write replaces raises committed before it

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{CellWrite, PlanContext, RuleSet, StepTally, TickSeed};
use crate::core::EngineError;
use crate::domain::cells::CellKind;
use crate::domain::config::{FloodRules, FlowSpeed};
use crate::grid::Grid;

static RULES: RuleSet = RuleSet::new();

/// Writes produced by one row, in the order its cells were visited.
#[derive(Clone, Debug, Default)]
struct RowPlan {
    writes: Vec<CellWrite>,
    tally: StepTally,
}

/// Every write of one tick, tagged with the grid shape it was planned for.
#[derive(Clone, Debug)]
pub struct StepPlan {
    width: u32,
    height: u32,
    rows: Vec<RowPlan>,
}

fn plan_row(grid: &Grid, rules: &FloodRules, flow: FlowSpeed, seed: TickSeed, y: u32) -> RowPlan {
    let mut rng = seed.row_rng(y);
    let mut row = RowPlan::default();

    for x in 0..grid.width() {
        let idx = grid.index(x, y);
        let kind = grid.kind_idx(idx);
        if matches!(kind, CellKind::Empty | CellKind::Dam) {
            continue;
        }
        row.tally.cells_planned += 1;
        if kind.holds_water() {
            row.tally.wet_cells += 1;
        }

        let mut ctx = PlanContext {
            grid,
            rules,
            flow,
            x,
            y,
            idx,
            rng: &mut rng,
            writes: &mut row.writes,
            tally: &mut row.tally,
        };
        RULES.plan_cell(&mut ctx);
    }

    row.tally.writes = row.writes.len() as u32;
    row
}

/// Evaluate every cell of `grid` against the rules without modifying it.
pub fn plan_step(grid: &Grid, rules: &FloodRules, flow: FlowSpeed, seed: TickSeed) -> StepPlan {
    let height = grid.height();

    #[cfg(feature = "parallel")]
    let rows: Vec<RowPlan> = (0..height)
        .into_par_iter()
        .map(|y| plan_row(grid, rules, flow, seed, y))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<RowPlan> = (0..height)
        .map(|y| plan_row(grid, rules, flow, seed, y))
        .collect();

    StepPlan {
        width: grid.width(),
        height,
        rows,
    }
}

impl StepPlan {
    pub fn tally(&self) -> StepTally {
        let mut total = StepTally::default();
        for row in &self.rows {
            total.merge(&row.tally);
        }
        total
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.writes.is_empty())
    }

    /// Apply the plan to the grid it was made from, producing the next grid.
    pub fn commit(&self, grid: &Grid) -> Result<Grid, EngineError> {
        if grid.width() != self.width || grid.height() != self.height {
            return Err(EngineError::ShapeMismatch {
                what: "step plan",
                expected_width: self.width,
                expected_height: self.height,
                actual_width: grid.width(),
                actual_height: grid.height(),
            });
        }
        Ok(self.commit_next(grid))
    }

    pub(crate) fn commit_next(&self, grid: &Grid) -> Grid {
        let mut kinds = grid.kinds().to_vec();
        let mut depth = grid.depths().to_vec();

        for row in &self.rows {
            for write in &row.writes {
                write.apply(&mut kinds, &mut depth);
            }
        }

        let mut next = grid.with_layers_of(kinds, depth);
        next.clamp_depths();
        next
    }
}

/// Advance `grid` by one tick. Pure: the input is untouched and the same
/// inputs always give the same output.
pub fn step(grid: &Grid, rules: &FloodRules, flow: FlowSpeed, seed: TickSeed) -> Grid {
    plan_step(grid, rules, flow, seed).commit_next(grid)
}
