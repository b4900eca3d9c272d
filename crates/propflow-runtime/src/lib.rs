//! Propflow Runtime - Trigger evaluation for Propflow automation
//!
//! This crate evaluates persisted filter expressions against event
//! payloads and carries the trigger configuration record the expressions
//! are stored in. Evaluation is pure and synchronous: it is safe to run
//! concurrently across events with no shared state beyond the immutable
//! expression itself.

pub mod error;
pub mod evaluator;
pub mod payload;
pub mod trigger;

// Re-export main types
pub use error::{Result, RuntimeError};
pub use evaluator::evaluate;
pub use payload::{lookup, payload_from_json, Payload};
pub use trigger::{TriggerConfig, TriggerType};
