//! Model-to-expression encoding
//!
//! Applies the per-operator value coercions that turn raw editor text
//! into the typed persisted form. Incomplete rules (empty field or empty
//! value) are staged UI state and never reach the output.

use propflow_core::{ConditionModel, ConditionRule, FilterExpression, RuleOperator, Value};
use std::collections::HashMap;

/// Encode a condition model into its persisted filter expression.
///
/// Rules sharing a field overwrite earlier entries: the persisted form
/// holds one operator per field and the last write wins. Every surviving
/// entry carries exactly one operator; `eq` entries are bare scalars.
pub fn encode(model: &ConditionModel) -> FilterExpression {
    let mut expr = FilterExpression::new();
    for rule in model.rules() {
        if !rule.is_complete() {
            continue;
        }
        expr.insert(rule.field.clone(), encode_rule(rule));
    }
    expr
}

fn encode_rule(rule: &ConditionRule) -> Value {
    match rule.operator {
        // eq is the one operator written without a wrapper
        RuleOperator::Eq => Value::String(rule.value.clone()),
        RuleOperator::Ne | RuleOperator::Contains => {
            clause(rule.operator, Value::String(rule.value.clone()))
        }
        RuleOperator::In | RuleOperator::Nin => {
            clause(rule.operator, Value::Array(split_list(&rule.value)))
        }
        RuleOperator::Exists => clause(
            rule.operator,
            Value::Bool(rule.value.eq_ignore_ascii_case("true")),
        ),
        RuleOperator::Gt | RuleOperator::Gte | RuleOperator::Lt | RuleOperator::Lte => {
            clause(rule.operator, numeric_or_raw(&rule.value))
        }
    }
}

/// Wrap a typed value in the single-key operator object form
fn clause(operator: RuleOperator, value: Value) -> Value {
    let mut entry = HashMap::new();
    entry.insert(operator.wire_key(), value);
    Value::Object(entry)
}

/// Comma-separated list to an array of trimmed, non-empty strings
fn split_list(raw: &str) -> Vec<Value> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| Value::String(segment.to_string()))
        .collect()
}

/// Comparison values are numeric when they parse; a value that is not a
/// number yet stays a string rather than dropping the rule. Non-finite
/// parses (nan, inf) also stay strings since JSON cannot carry them.
fn numeric_or_raw(raw: &str) -> Value {
    match raw.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Value::Number(number),
        _ => Value::String(raw.to_string()),
    }
}
