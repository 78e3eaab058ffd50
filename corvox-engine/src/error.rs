//! Layered error types

use corvox_core::CoreError;
use thiserror::Error;

/// Engine-level errors (orchestration layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core pipeline construction error
    #[error("core pipeline error: {0}")]
    Core(#[from] CoreError),

    /// Unsupported locale code
    #[error("locale '{code}' not supported")]
    UnsupportedLocale {
        /// The locale code that has no rule set
        code: String,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
