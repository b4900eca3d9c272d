//! Walkthrough of the trigger pipeline: edit rules, persist, evaluate
//!
//! Run with: cargo run --example deal_stage_trigger

use propflow_codec::{decode, encode};
use propflow_core::{ConditionModel, RuleOperator, RulePatch};
use propflow_runtime::{payload_from_json, TriggerConfig, TriggerType};

fn main() {
    println!("=== Propflow Deal Stage Trigger Example ===\n");

    // 1. A user edits conditions for an "update" trigger
    println!("1. Editing conditions:");
    let mut model = ConditionModel::new();

    let stage = model.add_rule("new.stage");
    model.update_rule(&stage, RulePatch::new().value("under_contract"));

    let price = model.add_rule("new.price");
    model.update_rule(
        &price,
        RulePatch::new().operator(RuleOperator::Gte).value("250000"),
    );

    // A half-filled row stays in the editor but never persists
    model.add_rule("new.beds");

    for rule in model.rules() {
        println!("   {} {} {:?}", rule.field, rule.operator, rule.value);
    }

    // 2. Every edit re-encodes to the persisted filter form
    let conditions = encode(&model);
    println!(
        "\n2. Persisted filter expression:\n{}\n",
        serde_json::to_string_pretty(&conditions).expect("filter expressions serialize")
    );

    // 3. The expression travels inside the trigger's stored record
    let config = TriggerConfig::new("hot deal alert", TriggerType::Update)
        .with_conditions(conditions)
        .with_priority(5);
    let stored = config.to_json().expect("config serializes");
    println!("3. Stored trigger record:\n{}\n", stored);

    // 4. At event time the record is loaded and evaluated
    let loaded = TriggerConfig::from_json(&stored).expect("stored record parses");

    let matching = payload_from_json(serde_json::json!({
        "new.stage": "under_contract",
        "old.stage": "showing",
        "new.price": 310000
    }));
    let too_cheap = payload_from_json(serde_json::json!({
        "new.stage": "under_contract",
        "old.stage": "showing",
        "new.price": 180000
    }));

    println!("4. Evaluating events:");
    println!("   price 310000 -> fires: {}", loaded.should_fire(&matching));
    println!("   price 180000 -> fires: {}", loaded.should_fire(&too_cheap));

    // 5. Reopening the editor decodes the stored expression
    println!("\n5. Reopened editor rules:");
    for rule in decode(&loaded.conditions).rules() {
        println!("   {} {} {:?}", rule.field, rule.operator, rule.value);
    }

    println!("\n=== Example Complete ===");
}
