//! Event payload lookup
//!
//! Event payloads are JSON objects keyed by the per-trigger-type field
//! convention: update events carry flat `new.<field>` / `old.<field>`
//! keys, create events unprefixed ones. Lookup therefore tries the
//! literal key first and only then walks the path through nested
//! objects, so both flattened and nested producers work.

use propflow_core::Value;
use std::collections::HashMap;

/// Event payload handed to the evaluator
pub type Payload = HashMap<String, Value>;

/// Look up a dot-path in a payload.
///
/// Returns `None` when the key is missing or the path descends through a
/// non-object.
pub fn lookup<'a>(payload: &'a Payload, path: &str) -> Option<&'a Value> {
    if let Some(value) = payload.get(path) {
        return Some(value);
    }

    let mut segments = path.split('.');
    let mut current = payload.get(segments.next()?)?;
    for segment in segments {
        match current {
            Value::Object(map) => current = map.get(segment)?,
            _ => {
                tracing::debug!("lookup: path {} hit a non-object before {}", path, segment);
                return None;
            }
        }
    }
    Some(current)
}

/// Whether the path holds a value. An explicit null counts as absent.
pub fn is_present(payload: &Payload, path: &str) -> bool {
    !matches!(lookup(payload, path), None | Some(Value::Null))
}

/// Build a payload from a JSON object.
///
/// Non-object JSON yields an empty payload (which matches only empty
/// filter expressions).
pub fn payload_from_json(json: serde_json::Value) -> Payload {
    serde_json::from_value(json).unwrap_or_default()
}
