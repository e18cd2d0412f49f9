use crate::domain::classify::Overlay;
use crate::domain::config::FloodConfig;
use crate::grid::Grid;
use crate::systems::flood::StepTally;

use super::perf_stats::PerfStats;
use super::tools::ToolBox;
use super::{FloodCore, RenderBuffers};

pub(crate) const DEFAULT_OVERLAY_OPACITY: u8 = 128;

/// Callers validate `config` first; an invalid flow speed falls back to 1.0.
pub(super) fn create_flood_core(grid: Grid, overlay: Option<Overlay>, config: &FloodConfig) -> FloodCore {
    let size = grid.size();
    log::info!(
        "flood world {}x{} (overlay: {}, seed {:#x})",
        grid.width(),
        grid.height(),
        overlay.is_some(),
        config.seed
    );

    FloodCore {
        initial: grid.clone(),
        grid,
        render: RenderBuffers {
            colors: vec![0u32; size],
            overlay_visible: overlay.is_some(),
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
        },
        overlay,

        rules: config.rules,
        flow_speed: config.flow().unwrap_or_default(),
        seed: config.seed,
        paused: config.paused,

        frame: 0,
        tools: ToolBox::new(config.tools),
        last_tally: StepTally::default(),

        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
