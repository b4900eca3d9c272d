//! Error types for Propflow Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Rule field must not be empty")]
    EmptyField,
}

pub type Result<T> = std::result::Result<T, CoreError>;
