//! Static operator metadata for UI layers
//!
//! Presentation lookup only; nothing here affects codec or evaluation
//! behavior.

use crate::condition::RuleOperator;

/// Display metadata for one operator
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub operator: RuleOperator,
    /// Short label for the operator dropdown
    pub label: &'static str,
    /// Placeholder for the value input
    pub hint: &'static str,
}

/// Operators in editor display order, with labels and input hints
pub const OPERATOR_CATALOG: [OperatorInfo; 10] = [
    OperatorInfo { operator: RuleOperator::Eq, label: "equals", hint: "exact value" },
    OperatorInfo { operator: RuleOperator::Ne, label: "does not equal", hint: "exact value" },
    OperatorInfo { operator: RuleOperator::In, label: "is one of", hint: "comma-separated values" },
    OperatorInfo { operator: RuleOperator::Nin, label: "is not one of", hint: "comma-separated values" },
    OperatorInfo { operator: RuleOperator::Contains, label: "contains", hint: "text fragment" },
    OperatorInfo { operator: RuleOperator::Exists, label: "is set", hint: "true or false" },
    OperatorInfo { operator: RuleOperator::Gt, label: "greater than", hint: "number" },
    OperatorInfo { operator: RuleOperator::Gte, label: "at least", hint: "number" },
    OperatorInfo { operator: RuleOperator::Lt, label: "less than", hint: "number" },
    OperatorInfo { operator: RuleOperator::Lte, label: "at most", hint: "number" },
];

/// Dropdown label for an operator
pub fn operator_label(operator: RuleOperator) -> &'static str {
    OPERATOR_CATALOG
        .iter()
        .find(|info| info.operator == operator)
        .map(|info| info.label)
        .unwrap_or_else(|| operator.as_str())
}
