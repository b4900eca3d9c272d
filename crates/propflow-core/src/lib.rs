//! Propflow Core - Shared types for Propflow trigger automation
//!
//! This crate provides the types used across the Propflow workspace:
//! - Value types for filter entries and event payloads
//! - The editable condition model and its closed operator set
//! - The persisted filter expression wire form
//! - The static operator catalog consumed by UI layers
//! - Error types

pub mod catalog;
pub mod condition;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use condition::{ConditionModel, ConditionRule, FilterExpression, RuleOperator, RulePatch};
pub use error::CoreError;
pub use types::Value;
