use thiserror::Error;

/// Coarse classification of [`EngineError`], for callers that only branch on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    ShapeMismatch,
    InvalidParameter,
    Config,
    UnknownTool,
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// Two rasters or layers that must share dimensions do not.
    #[error("{what}: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    ShapeMismatch {
        what: &'static str,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// A flat buffer does not hold `width * height` entries.
    #[error("{what}: expected {expected} entries, got {actual}")]
    LayerLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unknown tool '{0}'")]
    UnknownTool(String),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::ShapeMismatch { .. } | EngineError::LayerLength { .. } => {
                ErrorKind::ShapeMismatch
            }
            EngineError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            EngineError::Config(_) => ErrorKind::Config,
            EngineError::UnknownTool(_) => ErrorKind::UnknownTool,
        }
    }

    pub(crate) fn invalid(name: &'static str, value: impl Into<f64>) -> Self {
        EngineError::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_reports_as_shape_mismatch() {
        let err = EngineError::LayerLength {
            what: "depth layer",
            expected: 12,
            actual: 11,
        };
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(err.to_string(), "depth layer: expected 12 entries, got 11");
    }

    #[test]
    fn invalid_parameter_message() {
        let err = EngineError::invalid("flow speed", -1.0f32);
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(err.to_string(), "invalid flow speed: -1");
    }
}
