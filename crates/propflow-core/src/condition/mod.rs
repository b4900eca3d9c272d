//! Condition Model Module
//!
//! The editable and persisted representations of a trigger's filter
//! conditions, used by:
//! - The condition editor (ordered rule list, structural edits)
//! - The persistence layer (filter expression wire form)
//! - The evaluator (filter expression match semantics)
//!
//! # Wire form
//!
//! A filter expression is a JSON object keyed by field dot-path. An
//! entry is either a bare scalar (implicit equality) or a single-key
//! operator object:
//!
//! ```json
//! {
//!   "stage": "lead",
//!   "beds": { "$in": ["3", "4", "5"] },
//!   "price": { "$gt": 500000 },
//!   "old.status": { "$exists": true }
//! }
//! ```
//!
//! ## Supported Operators
//! - `eq` (equal, written bare)
//! - `ne` (not equal)
//! - `in` / `nin` (membership in a comma-separated list)
//! - `contains` (string contains)
//! - `exists` (field presence)
//! - `gt` / `gte` / `lt` / `lte` (numeric comparison)
//!
//! Matching is a conjunction: every entry must match for the trigger to
//! fire. An empty expression matches every event.

mod filter;
mod model;
mod operator;

pub use filter::FilterExpression;
pub use model::{ConditionModel, ConditionRule, RulePatch};
pub use operator::RuleOperator;
