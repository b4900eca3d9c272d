//! Runtime error types

use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Malformed trigger configuration record
    #[error("Invalid trigger configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
