//! Persisted filter expression
//!
//! The wire form of a trigger's conditions: a JSON object mapping field
//! dot-paths to either a bare scalar (implicit equality) or a single-key
//! operator object such as `{"$in": ["3", "4"]}`.
//!
//! Key order is user-visible when the blob is inspected or re-edited, so
//! entries keep insertion order. Lookups are linear; expressions hold a
//! handful of fields.

use crate::types::Value;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Insertion-ordered mapping from field dot-path to filter entry
#[derive(Debug, Clone, Default)]
pub struct FilterExpression {
    entries: Vec<(String, Value)>,
}

impl FilterExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map-semantics insert: an existing key keeps its position and has
    /// its entry overwritten (last write wins).
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        let field = field.into();
        match self.entries.iter_mut().find(|(key, _)| *key == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mapping equality: same keys and values, key order irrelevant
impl PartialEq for FilterExpression {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl FromIterator<(String, Value)> for FilterExpression {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut expr = FilterExpression::new();
        for (key, value) in iter {
            expr.insert(key, value);
        }
        expr
    }
}

impl Serialize for FilterExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct FilterExpressionVisitor;

impl<'de> Visitor<'de> for FilterExpressionVisitor {
    type Value = FilterExpression;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field paths to filter entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut expr = FilterExpression::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            expr.insert(key, value);
        }
        Ok(expr)
    }
}

impl<'de> Deserialize<'de> for FilterExpression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FilterExpressionVisitor)
    }
}
