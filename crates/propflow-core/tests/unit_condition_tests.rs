//! Unit tests for the condition model and filter expression types
//!
//! Tests the core data structures shared across the Propflow workspace

use anyhow::Result;
use propflow_core::{ConditionModel, ConditionRule, FilterExpression, RuleOperator, RulePatch, Value};

// =============================================================================
// ConditionModel Tests
// =============================================================================

#[test]
fn test_model_edit_cycle() {
    let mut model = ConditionModel::new();

    let id = model.add_rule("");
    model.update_rule(&id, RulePatch::new().field("new.stage"));
    model.update_rule(&id, RulePatch::new().value("under_contract"));

    let rule = model.get(&id).unwrap();
    assert_eq!(rule.field, "new.stage");
    assert_eq!(rule.operator, RuleOperator::Eq);
    assert_eq!(rule.value, "under_contract");
}

#[test]
fn test_rule_id_survives_edits() {
    let mut model = ConditionModel::new();
    let id = model.add_rule("stage");

    model.update_rule(&id, RulePatch::new().field("status").value("active"));
    model.update_rule(&id, RulePatch::new().operator(RuleOperator::Ne));

    assert_eq!(model.get(&id).unwrap().id, id);
}

#[test]
fn test_model_serde() -> Result<()> {
    let mut model = ConditionModel::new();
    model.push_rule("stage", RuleOperator::Eq, "lead");
    model.push_rule("price", RuleOperator::Gt, "100000");

    let json = serde_json::to_string(&model)?;
    let back: ConditionModel = serde_json::from_str(&json)?;
    assert_eq!(model, back);
    Ok(())
}

#[test]
fn test_rule_serde_shape() -> Result<()> {
    let rule: ConditionRule = serde_json::from_str(
        r#"{"id": "r-1", "field": "beds", "operator": "in", "value": "3, 4"}"#,
    )?;
    assert_eq!(rule.operator, RuleOperator::In);
    assert_eq!(rule.value, "3, 4");
    Ok(())
}

// =============================================================================
// FilterExpression Tests
// =============================================================================

#[test]
fn test_expression_parses_persisted_blob() -> Result<()> {
    let expr: FilterExpression = serde_json::from_str(
        r#"{
            "stage": "lead",
            "beds": {"$in": ["3", "4", "5"]},
            "price": {"$gt": 500000},
            "old.status": {"$exists": false}
        }"#,
    )?;

    assert_eq!(expr.len(), 4);
    assert_eq!(expr.get("stage"), Some(&Value::String("lead".to_string())));

    match expr.get("price") {
        Some(Value::Object(clause)) => {
            assert_eq!(clause.get("$gt"), Some(&Value::Number(500000.0)));
        }
        other => panic!("Expected operator object for price, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_expression_last_write_wins_on_duplicate_keys() -> Result<()> {
    // A hand-edited blob with a repeated key keeps the later entry,
    // matching map semantics.
    let expr: FilterExpression =
        serde_json::from_str(r#"{"stage": "lead", "stage": "closed"}"#)?;

    assert_eq!(expr.len(), 1);
    assert_eq!(expr.get("stage"), Some(&Value::String("closed".to_string())));
    Ok(())
}
