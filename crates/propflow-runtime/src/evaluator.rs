//! Trigger condition evaluation
//!
//! Reference implementation of the match semantics the persisted filter
//! form implies: every entry must match its payload value (AND across
//! fields, no OR composition), and an empty expression matches every
//! event.
//!
//! Two policies the wire form leaves open are fixed here:
//! - Comparison entries whose stored value is still a string (the editor
//!   accepted non-numeric text) get a best-effort numeric parse on both
//!   sides at evaluation time; if either side is not numeric the entry
//!   does not match. String ordering is never used.
//! - A payload path holding an explicit null counts as absent for
//!   `$exists`.

use crate::payload::{is_present, lookup, Payload};
use propflow_core::{FilterExpression, RuleOperator, Value};

/// Evaluate a filter expression against an event payload.
///
/// Pure function over its inputs; safe to call concurrently.
pub fn evaluate(expr: &FilterExpression, payload: &Payload) -> bool {
    expr.iter().all(|(field, entry)| {
        let matched = entry_matches(field, entry, payload);
        tracing::debug!("filter entry {} matched={}", field, matched);
        matched
    })
}

fn entry_matches(field: &str, entry: &Value, payload: &Payload) -> bool {
    match entry {
        Value::Object(clauses) => clauses
            .iter()
            .all(|(key, stored)| clause_matches(field, key, stored, payload)),
        // bare scalar: implicit equality
        _ => text_eq(lookup(payload, field), entry),
    }
}

fn clause_matches(field: &str, key: &str, stored: &Value, payload: &Payload) -> bool {
    let Some(operator) = RuleOperator::from_wire_key(key) else {
        tracing::debug!("unknown clause key {} on {}, treating as non-match", key, field);
        return false;
    };

    let found = lookup(payload, field);
    match operator {
        RuleOperator::Eq => text_eq(found, stored),
        RuleOperator::Ne => !text_eq(found, stored),
        RuleOperator::In => in_list(found, stored),
        RuleOperator::Nin => !in_list(found, stored),
        RuleOperator::Contains => match found {
            Some(value) => value.as_text().contains(&stored.as_text()),
            None => false,
        },
        RuleOperator::Exists => match stored {
            Value::Bool(expected) => is_present(payload, field) == *expected,
            _ => false,
        },
        RuleOperator::Gt | RuleOperator::Gte | RuleOperator::Lt | RuleOperator::Lte => {
            compare(found, operator, stored)
        }
    }
}

/// Equality is on string forms: the stored side is raw editor text
fn text_eq(found: Option<&Value>, stored: &Value) -> bool {
    match found {
        Some(value) => value.as_text() == stored.as_text(),
        None => false,
    }
}

fn in_list(found: Option<&Value>, stored: &Value) -> bool {
    let (Some(value), Value::Array(options)) = (found, stored) else {
        return false;
    };
    let text = value.as_text();
    options.iter().any(|option| option.as_text() == text)
}

/// Numeric comparison with best-effort parsing on both sides
fn compare(found: Option<&Value>, operator: RuleOperator, stored: &Value) -> bool {
    let (Some(left), Some(right)) = (found.and_then(Value::as_number), stored.as_number()) else {
        tracing::debug!("non-numeric {} operand, treating as non-match", operator);
        return false;
    };
    match operator {
        RuleOperator::Gt => left > right,
        RuleOperator::Gte => left >= right,
        RuleOperator::Lt => left < right,
        RuleOperator::Lte => left <= right,
        _ => false,
    }
}
