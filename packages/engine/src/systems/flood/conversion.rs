//! ConversionRule - terrain floods once its wet neighbours are saturated
//!
//! A terrain cell whose every wet neighbour is at least `flood_threshold` deep
//! (and that has at least one) becomes flooded terrain at `flooded_depth`.
//! In the same tick every adjacent cell that is still terrain floods with it,
//! without checking its own neighbours. This bundled hop lets a flood front
//! cross solid ground faster than one cell per tick.
//!
//! Dams are never touched.

use super::{CellWrite, FloodRule, PlanContext};
use crate::domain::cells::CellKind;

pub struct ConversionRule;

impl FloodRule for ConversionRule {
    fn plan(&self, ctx: &mut PlanContext) {
        let grid = ctx.grid;
        let (x, y) = ctx.pos();
        if !grid.all_adjacent_water_at_least(x, y, ctx.rules.flood_threshold) {
            return;
        }

        let flooded = CellWrite::Set {
            idx: ctx.idx,
            kind: CellKind::FloodedTerrain,
            depth: ctx.rules.flooded_depth,
        };
        ctx.push(flooded);
        ctx.tally.conversions += 1;

        for n in grid.neighbors(x, y) {
            if grid.kind_idx(n) == CellKind::Terrain {
                ctx.push(CellWrite::Set {
                    idx: n,
                    kind: CellKind::FloodedTerrain,
                    depth: ctx.rules.flooded_depth,
                });
                ctx.tally.bundled += 1;
            }
        }
    }
}
