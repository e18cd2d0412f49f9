//! SpreadRule - attenuating outward spread from a wet cell
//!
//! The four directions are shuffled per cell; the first one that is empty or
//! flooded terrain receives water and the scan stops, so a cell affects at
//! most one neighbour per tick. Depth drops by `spread_decrease * flow` per
//! hop but new water never starts below `spread_floor`.

use rand::seq::SliceRandom;

use super::{CellWrite, FloodRule, PlanContext};
use crate::domain::cells::CellKind;
use crate::grid::VON_NEUMANN;

pub struct SpreadRule;

impl FloodRule for SpreadRule {
    fn plan(&self, ctx: &mut PlanContext) {
        let grid = ctx.grid;
        let (x, y) = ctx.pos();
        if !grid.has_spreadable_neighbor(x, y) {
            return;
        }

        let mut order = VON_NEUMANN;
        order.shuffle(&mut *ctx.rng);

        let outflow = ctx.depth() - ctx.rules.spread_decrease * ctx.flow.get();

        for (dx, dy) in order {
            let Some(n) = grid.checked_index(x + dx, y + dy) else {
                continue;
            };
            match grid.kind_idx(n) {
                CellKind::Empty => {
                    ctx.push(CellWrite::Set {
                        idx: n,
                        kind: CellKind::Water,
                        depth: outflow.max(ctx.rules.spread_floor),
                    });
                    ctx.tally.spreads += 1;
                    return;
                }
                CellKind::FloodedTerrain => {
                    ctx.push(CellWrite::Raise {
                        idx: n,
                        depth: outflow.min(1.0),
                    });
                    ctx.tally.raises += 1;
                    return;
                }
                _ => {}
            }
        }
    }
}
