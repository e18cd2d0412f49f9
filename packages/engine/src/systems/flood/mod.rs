//! Flood rules - the cellular automaton that advances the grid one tick
//!
//! Rules never touch the grid they read. Each rule looks at the pre-step
//! snapshot and appends `CellWrite`s to its row's plan; the driver then
//! commits every plan into fresh buffers in row-major order.
//!
//! - Water / flooded terrain: spread into one neighbour, then diffuse depth
//! - Terrain: flood once every wet neighbour is near saturation
//! - Empty / dam: inert

mod context;
mod spread;
mod diffusion;
mod conversion;
mod seeding;
mod driver;

pub use context::{CellWrite, PlanContext, StepTally};
pub use conversion::ConversionRule;
pub use diffusion::DiffusionRule;
pub use driver::{plan_step, step, StepPlan};
pub use seeding::TickSeed;
pub use spread::SpreadRule;

use crate::domain::cells::CellKind;

/// A rule plans writes for the cell at `ctx.x, ctx.y`.
pub trait FloodRule {
    fn plan(&self, ctx: &mut PlanContext);
}

/// Dispatches each cell to the rules for its kind.
pub struct RuleSet {
    spread: SpreadRule,
    diffusion: DiffusionRule,
    conversion: ConversionRule,
}

impl RuleSet {
    pub const fn new() -> Self {
        Self {
            spread: SpreadRule,
            diffusion: DiffusionRule,
            conversion: ConversionRule,
        }
    }

    #[inline]
    pub fn plan_cell(&self, ctx: &mut PlanContext) {
        match ctx.kind() {
            CellKind::Water | CellKind::FloodedTerrain => {
                // Spread before diffusion: diffusion's write lands later in the plan.
                self.spread.plan(ctx);
                self.diffusion.plan(ctx);
            }
            CellKind::Terrain => self.conversion.plan(ctx),
            CellKind::Empty | CellKind::Dam => {}
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
