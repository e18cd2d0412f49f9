pub mod cells;
pub mod classify;
pub mod config;
pub mod palette;
