//! Core plumbing shared by every layer: the error type and the log bridge.

pub mod error;
pub mod logging;

pub use error::{EngineError, ErrorKind};
