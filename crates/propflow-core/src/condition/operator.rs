//! Filter rule operators
//!
//! The closed operator set of the condition editor. On the wire every
//! operator except `eq` appears as a `$`-prefixed object key; an `eq`
//! entry is written as a bare scalar instead.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filter rule operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleOperator {
    /// Equal
    Eq,
    /// Not equal
    Ne,
    /// Member of a list
    In,
    /// Not a member of a list
    Nin,
    /// String contains
    Contains,
    /// Field presence
    Exists,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
}

impl RuleOperator {
    /// Every operator, in editor display order
    pub const ALL: [RuleOperator; 10] = [
        RuleOperator::Eq,
        RuleOperator::Ne,
        RuleOperator::In,
        RuleOperator::Nin,
        RuleOperator::Contains,
        RuleOperator::Exists,
        RuleOperator::Gt,
        RuleOperator::Gte,
        RuleOperator::Lt,
        RuleOperator::Lte,
    ];

    /// Canonical lowercase name (`"eq"`, `"gte"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleOperator::Eq => "eq",
            RuleOperator::Ne => "ne",
            RuleOperator::In => "in",
            RuleOperator::Nin => "nin",
            RuleOperator::Contains => "contains",
            RuleOperator::Exists => "exists",
            RuleOperator::Gt => "gt",
            RuleOperator::Gte => "gte",
            RuleOperator::Lt => "lt",
            RuleOperator::Lte => "lte",
        }
    }

    /// Object key used in the persisted form (`"$gt"`).
    ///
    /// `eq` never appears wrapped in practice, but its key is still
    /// defined so wire parsing stays total.
    pub fn wire_key(&self) -> String {
        format!("${}", self.as_str())
    }

    /// Parse a persisted object key (`"$in"`) back to an operator
    pub fn from_wire_key(key: &str) -> Option<RuleOperator> {
        key.strip_prefix('$').and_then(|name| name.parse().ok())
    }

    /// Returns true for the numeric comparison operators
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            RuleOperator::Gt | RuleOperator::Gte | RuleOperator::Lt | RuleOperator::Lte
        )
    }

    /// Returns true for the membership operators (comma-separated values)
    pub fn is_membership(&self) -> bool {
        matches!(self, RuleOperator::In | RuleOperator::Nin)
    }
}

impl FromStr for RuleOperator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(RuleOperator::Eq),
            "ne" => Ok(RuleOperator::Ne),
            "in" => Ok(RuleOperator::In),
            "nin" => Ok(RuleOperator::Nin),
            "contains" => Ok(RuleOperator::Contains),
            "exists" => Ok(RuleOperator::Exists),
            "gt" => Ok(RuleOperator::Gt),
            "gte" => Ok(RuleOperator::Gte),
            "lt" => Ok(RuleOperator::Lt),
            "lte" => Ok(RuleOperator::Lte),
            other => Err(CoreError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for op in RuleOperator::ALL {
            assert_eq!(op.as_str().parse::<RuleOperator>(), Ok(op));
        }
    }

    #[test]
    fn test_wire_key() {
        assert_eq!(RuleOperator::Gt.wire_key(), "$gt");
        assert_eq!(RuleOperator::Nin.wire_key(), "$nin");
    }

    #[test]
    fn test_from_wire_key() {
        assert_eq!(RuleOperator::from_wire_key("$in"), Some(RuleOperator::In));
        assert_eq!(RuleOperator::from_wire_key("$exists"), Some(RuleOperator::Exists));
        assert_eq!(RuleOperator::from_wire_key("in"), None);
        assert_eq!(RuleOperator::from_wire_key("$between"), None);
    }

    #[test]
    fn test_unknown_operator_error() {
        let err = "like".parse::<RuleOperator>().unwrap_err();
        assert_eq!(err, CoreError::UnknownOperator("like".to_string()));
    }

    #[test]
    fn test_predicates() {
        assert!(RuleOperator::Gte.is_comparison());
        assert!(!RuleOperator::Eq.is_comparison());
        assert!(RuleOperator::Nin.is_membership());
        assert!(!RuleOperator::Contains.is_membership());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RuleOperator::Gte).unwrap();
        assert_eq!(json, "\"gte\"");
        let op: RuleOperator = serde_json::from_str("\"contains\"").unwrap();
        assert_eq!(op, RuleOperator::Contains);
    }
}
