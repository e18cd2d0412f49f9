//! DiffusionRule - pulls a wet cell toward the mean of its wet neighbours
//!
//! new = min(1, max(current, mean + diffusion_bias * flow))
//!
//! Never lowers the cell's own depth. Runs whether or not the cell spread.

use super::{CellWrite, FloodRule, PlanContext};

pub struct DiffusionRule;

impl FloodRule for DiffusionRule {
    fn plan(&self, ctx: &mut PlanContext) {
        let grid = ctx.grid;
        let (x, y) = ctx.pos();
        let wet = grid.adjacent_water_cells(x, y);
        if wet.is_empty() {
            return;
        }

        let sum: f32 = wet.as_slice().iter().map(|&n| grid.depth_idx(n)).sum();
        let mean = sum / wet.len() as f32;
        let target = mean + ctx.rules.diffusion_bias * ctx.flow.get();

        ctx.push(CellWrite::Depth {
            idx: ctx.idx,
            depth: ctx.depth().max(target).min(1.0),
        });
    }
}
