//! Round-trip and coercion tests for the condition codec
//!
//! Covers the persisted-form guarantees the automation surface relies
//! on: expressions re-encode byte-for-byte after an editor session, and
//! every operator's text coercion lands the documented typed value.

use anyhow::Result;
use propflow_codec::{decode, encode};
use propflow_core::{ConditionModel, FilterExpression, RuleOperator, Value};

fn full_model() -> ConditionModel {
    let mut model = ConditionModel::new();
    model.push_rule("stage", RuleOperator::Eq, "lead");
    model.push_rule("status", RuleOperator::Ne, "archived");
    model.push_rule("beds", RuleOperator::In, "3, 4,5");
    model.push_rule("city", RuleOperator::Nin, "Austin, Dallas");
    model.push_rule("notes", RuleOperator::Contains, "pool");
    model.push_rule("old.agent", RuleOperator::Exists, "TRUE");
    model.push_rule("price", RuleOperator::Gt, "100000");
    model.push_rule("sqft", RuleOperator::Gte, "1200");
    model.push_rule("days_on_market", RuleOperator::Lt, "30");
    model.push_rule("close_date", RuleOperator::Lte, "next week");
    model
}

#[test]
fn test_encode_then_decode_then_encode_is_identity() {
    let expr = encode(&full_model());
    let reencoded = encode(&decode(&expr));
    assert_eq!(reencoded, expr);
}

#[test]
fn test_round_trip_preserves_wire_json() -> Result<()> {
    let expr = encode(&full_model());
    let reencoded = encode(&decode(&expr));

    // Compare the serialized blobs too: the persisted form must not
    // drift across an open-and-save editor session.
    assert_eq!(serde_json::to_value(&expr)?, serde_json::to_value(&reencoded)?);
    Ok(())
}

#[test]
fn test_round_trip_after_collision() {
    let mut model = ConditionModel::new();
    model.push_rule("price", RuleOperator::Gt, "100000");
    model.push_rule("price", RuleOperator::Lt, "500000");

    let expr = encode(&model);
    let decoded = decode(&expr);

    // Only the surviving rule comes back
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded.rules()[0].operator, RuleOperator::Lt);
    assert_eq!(encode(&decoded), expr);
}

#[test]
fn test_decode_of_hand_written_blob_reencodes_cleanly() -> Result<()> {
    let expr: FilterExpression = serde_json::from_str(
        r#"{
            "stage": "showing",
            "beds": {"$in": ["3", "4"]},
            "price": {"$lte": 750000},
            "new.agent": {"$exists": true}
        }"#,
    )?;

    assert_eq!(encode(&decode(&expr)), expr);
    Ok(())
}

#[test]
fn test_incomplete_rules_never_reach_output() {
    let mut model = ConditionModel::new();
    model.add_rule("stage");
    model.add_rule("");
    model.push_rule("status", RuleOperator::Eq, "active");

    let expr = encode(&model);
    assert_eq!(expr.len(), 1);
    assert!(!expr.contains_field("stage"));
    assert!(!expr.contains_field(""));
}

#[test]
fn test_operator_coercion_fixtures() -> Result<()> {
    let mut model = ConditionModel::new();
    model.push_rule("beds", RuleOperator::In, "3, 4,5");
    assert_eq!(
        serde_json::to_value(encode(&model))?,
        serde_json::json!({"beds": {"$in": ["3", "4", "5"]}})
    );

    let mut model = ConditionModel::new();
    model.push_rule("x", RuleOperator::Exists, "TRUE");
    assert_eq!(
        serde_json::to_value(encode(&model))?,
        serde_json::json!({"x": {"$exists": true}})
    );

    let mut model = ConditionModel::new();
    model.push_rule("x", RuleOperator::Exists, "nope");
    assert_eq!(
        serde_json::to_value(encode(&model))?,
        serde_json::json!({"x": {"$exists": false}})
    );

    let mut model = ConditionModel::new();
    model.push_rule("stage", RuleOperator::Eq, "lead");
    assert_eq!(
        serde_json::to_value(encode(&model))?,
        serde_json::json!({"stage": "lead"})
    );

    let mut model = ConditionModel::new();
    model.push_rule("price", RuleOperator::Gt, "100000");
    assert_eq!(
        serde_json::to_value(encode(&model))?,
        serde_json::json!({"price": {"$gt": 100000.0}})
    );
    Ok(())
}

#[test]
fn test_encode_is_idempotent_over_reencode() {
    let model = full_model();
    assert_eq!(encode(&model), encode(&model));
}
