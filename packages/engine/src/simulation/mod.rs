//! FloodCore - native simulation session
//!
//! Owns the grid and everything that drives it: rule constants, flow speed,
//! seed, the tool editor and the render buffers. The engine proper lives in
//! `systems::flood`; this module only orchestrates it.
//!
//! All mutation goes through `&mut FloodCore`, so a brush edit can never land
//! while a step is in flight.

use crate::core::EngineError;
use crate::domain::cells::CellKind;
use crate::domain::classify::{ClassifiedMap, Overlay, RasterView};
use crate::domain::config::{FloodConfig, FloodRules, FlowSpeed};
use crate::grid::{Census, Grid};
use crate::systems::flood::StepTally;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/tools.rs"]
mod tools;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::FloodWorld;
pub use perf_stats::PerfStats;
pub use tools::{Tool, ToolBox};

use perf_timer::PerfTimer;

/// Color buffer handed to the JS renderer, plus overlay display state.
struct RenderBuffers {
    colors: Vec<u32>,
    overlay_visible: bool,
    overlay_opacity: u8,
}

pub struct FloodCore {
    grid: Grid,
    /// Grid as classified at load time, for `reset_to_initial`.
    initial: Grid,
    overlay: Option<Overlay>,

    // Settings
    rules: FloodRules,
    flow_speed: FlowSpeed,
    seed: u64,
    paused: bool,

    // State
    frame: u64,
    tools: ToolBox,
    render: RenderBuffers,
    last_tally: StepTally,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FloodCore {
    /// Empty, dry world with the default config.
    ///
    /// # Panics
    /// When the dimensions do not fit in memory; see `try_new`.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_flood_core(Grid::new(width, height), None, &FloodConfig::default())
    }

    pub fn try_new(width: u32, height: u32) -> Result<Self, EngineError> {
        let grid = Grid::try_new(width, height)?;
        Ok(init::create_flood_core(grid, None, &FloodConfig::default()))
    }

    pub fn from_grid(grid: Grid, config: &FloodConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(init::create_flood_core(grid, None, config))
    }

    pub fn from_classified(map: ClassifiedMap, config: &FloodConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(init::create_flood_core(map.grid, map.overlay, config))
    }

    /// Classify decoded images and start a session on the result.
    pub fn from_rasters(
        map: &RasterView,
        overlay: Option<&RasterView>,
        config: &FloodConfig,
    ) -> Result<Self, EngineError> {
        let classified = crate::domain::classify::classify(map, overlay)?;
        Self::from_classified(classified, config)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Number of committed steps.
    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn overlay(&self) -> Option<&Overlay> { self.overlay.as_ref() }

    pub fn census(&self) -> Census { self.grid.census() }

    /// Counters from the most recent step.
    pub fn last_tally(&self) -> StepTally { self.last_tally }

    pub fn cell(&self, x: i32, y: i32) -> Option<(CellKind, f32)> {
        self.grid
            .checked_index(x, y)
            .map(|idx| (self.grid.kind_idx(idx), self.grid.depth_idx(idx)))
    }

    // === Settings ===

    pub fn flow_speed(&self) -> f32 { self.flow_speed.get() }

    /// Strict setter: non-positive or non-finite speeds are rejected.
    pub fn set_flow_speed(&mut self, speed: f32) -> Result<(), EngineError> {
        settings::set_flow_speed(self, speed)
    }

    /// Slider setter: clamps into the supported range and returns what was applied.
    pub fn set_flow_speed_clamped(&mut self, speed: f32) -> f32 {
        settings::set_flow_speed_clamped(self, speed)
    }

    pub fn seed(&self) -> u64 { self.seed }

    pub fn set_seed(&mut self, seed: u64) {
        settings::set_seed(self, seed);
    }

    pub fn rules(&self) -> &FloodRules { &self.rules }

    pub fn set_rules(&mut self, rules: FloodRules) -> Result<(), EngineError> {
        settings::set_rules(self, rules)
    }

    pub fn config(&self) -> FloodConfig {
        settings::config(self)
    }

    pub fn apply_config(&mut self, config: &FloodConfig) -> Result<(), EngineError> {
        settings::apply_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), EngineError> {
        let config = FloodConfig::from_json(json)?;
        self.apply_config(&config)
    }

    pub fn is_paused(&self) -> bool { self.paused }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === Simulation ===

    /// Advance exactly one tick, paused or not.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Advance one tick unless paused. Returns whether a step ran.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.step();
        true
    }

    /// Restore the grid as it was classified; settings and frame count are kept.
    pub fn reset_to_initial(&mut self) {
        self.grid = self.initial.clone();
        log::info!("grid reset to initial state at frame {}", self.frame);
    }

    // === Tool editor ===

    /// Paint a disc of `radius` around (cx, cy): depth always, kind when given.
    /// Returns the number of cells written.
    pub fn apply_tool(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        kind: Option<CellKind>,
        depth: f32,
    ) -> Result<u32, EngineError> {
        commands::apply_tool(self, cx, cy, radius, kind, depth)
    }

    pub fn tools(&self) -> &ToolBox { &self.tools }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tools.select(tool);
    }

    /// Grow or shrink the current brush (mouse wheel). Returns the new size.
    /// The brush radius is `max(1, size / 2)`, so sizes 1 to 3 all paint the
    /// same radius-1 disc (a 5-cell cross).
    pub fn adjust_tool_size(&mut self, delta: i32) -> u32 {
        self.tools.adjust_size(delta)
    }

    /// Apply the current tool at a grid position; off-grid clicks do nothing.
    pub fn use_tool(&mut self, x: i32, y: i32) -> u32 {
        commands::use_tool(self, x, y)
    }

    // === Rendering ===

    /// Repaint the ABGR color buffer from the grid and return its pointer.
    pub fn refresh_colors(&mut self) -> *const u32 {
        render_extract::refresh_colors(self)
    }

    pub fn colors(&self) -> &[u32] { &self.render.colors }

    pub fn colors_ptr(&self) -> *const u32 { self.render.colors.as_ptr() }

    pub fn kinds_ptr(&self) -> *const u8 { self.grid.kinds_ptr() }

    pub fn depth_ptr(&self) -> *const f32 { self.grid.depth_ptr() }

    pub fn cells_len(&self) -> usize { self.grid.size() }

    pub fn overlay_visible(&self) -> bool { self.render.overlay_visible }

    /// Flip overlay visibility; stays hidden when no overlay was loaded.
    pub fn toggle_overlay(&mut self) -> bool {
        self.render.overlay_visible = self.overlay.is_some() && !self.render.overlay_visible;
        self.render.overlay_visible
    }

    pub fn overlay_opacity(&self) -> u8 { self.render.overlay_opacity }

    pub fn set_overlay_opacity(&mut self, opacity: u8) {
        self.render.overlay_opacity = opacity;
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
