//! Expression-to-model decoding
//!
//! Re-populates a condition editor from a previously persisted filter
//! expression. Inverse of [`encode`](crate::encode) up to the documented
//! collision loss: a model that held two rules on one field comes back
//! with only the surviving rule.

use propflow_core::{ConditionModel, FilterExpression, RuleOperator, Value};

/// Decode a persisted filter expression back into editable rules.
///
/// Bare scalars become `eq` rules with the scalar's text form; operator
/// objects contribute one rule per recognized `$`-key, joining array
/// values with `", "`. Entry shapes `encode` cannot produce (nulls, bare
/// arrays, unknown keys) are skipped.
pub fn decode(expr: &FilterExpression) -> ConditionModel {
    let mut model = ConditionModel::new();
    for (field, entry) in expr.iter() {
        match entry {
            Value::Object(clauses) => {
                for (key, value) in clauses {
                    if let Some(operator) = RuleOperator::from_wire_key(key) {
                        model.push_rule(field, operator, value.as_text());
                    }
                }
            }
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                model.push_rule(field, RuleOperator::Eq, entry.as_text());
            }
            Value::Null | Value::Array(_) => {}
        }
    }
    model
}
