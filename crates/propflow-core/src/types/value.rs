//! Runtime value types for filter entries and event payloads
//!
//! The `Value` enum represents JSON-compatible data on both sides of the
//! trigger pipeline: the typed values stored inside a filter expression
//! and the event payload values they are matched against.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Object (key-value map)
    Object(HashMap<String, Value>),
}

impl Value {
    /// Render the value the way an editor value field shows it.
    ///
    /// Whole-number floats render without a fractional part (`100000`,
    /// not `100000.0`); array elements join with `", "`.
    pub fn as_text(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|v| v.as_text())
                .collect::<Vec<_>>()
                .join(", "),
            Value::Object(_) => "{...}".to_string(),
        }
    }

    /// Best-effort numeric view: numbers directly, strings via parse.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns true for the scalar variants a filter entry may carry bare
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Number(_) | Value::String(_))
    }
}
