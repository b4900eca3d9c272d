//! Editable condition model
//!
//! The order-preserving rule list behind a trigger's condition editor.
//! All edit operations are total: removing or updating a missing id is a
//! no-op. The model is transient UI state; the caller re-encodes it into
//! a [`FilterExpression`](super::FilterExpression) after every edit.

use crate::condition::operator::RuleOperator;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One `(field, operator, value)` filter constraint as edited in the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRule {
    /// Opaque id, stable across edits (used for list diffing only)
    pub id: String,
    /// Dot-path into the event payload (`"stage"`, `"new.stage"`)
    pub field: String,
    /// Comparison operator
    pub operator: RuleOperator,
    /// Raw text as typed; interpretation depends on `operator`
    pub value: String,
}

impl ConditionRule {
    /// Create a blank rule for `field` (empty string for a blank row)
    pub fn new(field: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            field: field.to_string(),
            operator: RuleOperator::Eq,
            value: String::new(),
        }
    }

    /// Incomplete rules are staged in the editor but never encoded
    pub fn is_complete(&self) -> bool {
        !self.field.is_empty() && !self.value.is_empty()
    }

    /// Caller-side check before persisting an edit
    pub fn validate(&self) -> Result<()> {
        if self.field.is_empty() {
            return Err(CoreError::EmptyField);
        }
        Ok(())
    }
}

/// Partial update applied by [`ConditionModel::update_rule`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulePatch {
    pub field: Option<String>,
    pub operator: Option<RuleOperator>,
    pub value: Option<String>,
}

impl RulePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }

    pub fn operator(mut self, operator: RuleOperator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }
}

/// Ordered list of rules behind one trigger's condition editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionModel {
    rules: Vec<ConditionRule>,
}

impl ConditionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules in editor order
    pub fn rules(&self) -> &[ConditionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ConditionRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Append a blank rule for `field` and return its id
    pub fn add_rule(&mut self, field: &str) -> String {
        let rule = ConditionRule::new(field);
        let id = rule.id.clone();
        self.rules.push(rule);
        id
    }

    /// Append a fully-formed rule (decode path)
    pub fn push_rule(&mut self, field: &str, operator: RuleOperator, value: impl Into<String>) {
        self.rules.push(ConditionRule {
            id: Uuid::new_v4().to_string(),
            field: field.to_string(),
            operator,
            value: value.into(),
        });
    }

    /// Remove the rule with `id`; no-op if absent
    pub fn remove_rule(&mut self, id: &str) {
        self.rules.retain(|rule| rule.id != id);
    }

    /// Merge `patch` into the rule with `id`; no-op if absent
    pub fn update_rule(&mut self, id: &str, patch: RulePatch) {
        if let Some(rule) = self.rules.iter_mut().find(|rule| rule.id == id) {
            if let Some(field) = patch.field {
                rule.field = field;
            }
            if let Some(operator) = patch.operator {
                rule.operator = operator;
            }
            if let Some(value) = patch.value {
                rule.value = value;
            }
        }
    }
}
