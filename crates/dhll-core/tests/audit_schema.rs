//! JSON Schema checks for the audit wire format.
//!
//! Locally recorded entries and well-formed `/audit/log` items share one
//! shape. The schema generated from `AuditEntry` accepts both; items without
//! a policy decision do not conform and are only carried as raw records.

use dhll_core::entities::{AuditEntry, AuditOptions, EnhanceResult, PolicyDecision};
use dhll_core::enums::PolicyAction;
use schemars::schema_for;
use serde_json::json;

fn schema_errors(instance: &serde_json::Value) -> Vec<String> {
    let schema = serde_json::to_value(schema_for!(AuditEntry)).expect("schema serializes");
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn locally_recorded_entry_matches_schema() {
    let entry = AuditEntry::record(
        "Wedding toast at sunset",
        AuditOptions {
            mode: "advisory".into(),
            tone: "celebratory".into(),
            culture: "latin_america".into(),
            environment: vec!["occ_wedding".into(), "time_dusk".into()],
            ui_mode: "full".into(),
        },
        &EnhanceResult {
            enriched: "Raise your glasses as the sun dips low".into(),
            tags: vec!["warm".into()],
            ..EnhanceResult::default()
        },
        PolicyDecision {
            action: PolicyAction::Allow,
            policy_mode: "advisory".into(),
            notes: "policy_endpoint_missing_fallback".into(),
        },
    );

    let instance = serde_json::to_value(&entry).expect("entry serializes");
    let errors = schema_errors(&instance);
    assert!(errors.is_empty(), "schema errors: {errors:?}");
}

#[test]
fn sparse_server_item_matches_schema() {
    let instance = json!({
        "ts": "2025-05-05T12:00:00Z",
        "policy": {"action": "block", "policy_mode": "enforce"}
    });
    let errors = schema_errors(&instance);
    assert!(errors.is_empty(), "schema errors: {errors:?}");
}

#[test]
fn item_without_policy_is_rejected() {
    let instance = json!({"ts": "2025-05-05T12:00:00Z", "input": "hi"});
    assert!(!schema_errors(&instance).is_empty());
}

#[test]
fn unknown_action_is_rejected() {
    let instance = json!({
        "ts": "2025-05-05T12:00:00Z",
        "policy": {"action": "maybe", "policy_mode": "advisory"}
    });
    assert!(!schema_errors(&instance).is_empty());
}
