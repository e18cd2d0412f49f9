//! Floodsim Engine - cellular-automaton flood simulation in WASM
//!
//! Architecture:
//! - core/       - Errors and logging
//! - domain/     - Cell kinds, palette, config, map classification
//! - spatial/    - Grid storage and neighbourhood queries
//! - systems/    - Flood rules and the step driver
//! - simulation/ - Session state, tool editor, rendering, JS facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Compatibility re-exports
pub use spatial::grid;
pub use systems::flood;

use wasm_bindgen::prelude::*;

// Thread pool for rayon on the web (needs a threads-enabled build)
#[cfg(all(feature = "wasm-threads", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_console_logger(log::LevelFilter::Info);
    log::info!("floodsim engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, ErrorKind};
pub use domain::cells::CellKind;
pub use domain::config::FloodConfig;
pub use grid::Grid;
pub use simulation::{FloodCore, FloodWorld, PerfStats, Tool, ToolBox};

// Export kind codes for JS
#[wasm_bindgen]
pub fn kind_empty() -> u8 { domain::cells::KIND_EMPTY }
#[wasm_bindgen]
pub fn kind_water() -> u8 { domain::cells::KIND_WATER }
#[wasm_bindgen]
pub fn kind_terrain() -> u8 { domain::cells::KIND_TERRAIN }
#[wasm_bindgen]
pub fn kind_dam() -> u8 { domain::cells::KIND_DAM }
#[wasm_bindgen]
pub fn kind_flooded() -> u8 { domain::cells::KIND_FLOODED }
