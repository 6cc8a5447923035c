//! Ledger persistence and merge behaviour over both store backends.

use std::sync::Arc;

use dhll_core::entities::{AuditEntry, AuditOptions, AuditRecord, EnhanceResult, PolicyDecision};
use dhll_core::wire::parse_audit_log;
use dhll_core::enums::PolicyAction;
use dhll_state::{AuditLedger, FileStore, MemoryStore, SettingsStore, StoreError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn entry(input: &str, action: PolicyAction) -> AuditEntry {
    AuditEntry::record(
        input,
        AuditOptions {
            mode: "advisory".into(),
            tone: "neutral".into(),
            culture: "NONE".into(),
            environment: vec!["time_night".into()],
            ui_mode: "full".into(),
        },
        &EnhanceResult {
            enriched: format!("{input}, enhanced"),
            ..EnhanceResult::default()
        },
        PolicyDecision {
            action,
            policy_mode: "advisory".into(),
            notes: String::new(),
        },
    )
}

fn record(entry: &AuditEntry) -> AuditRecord {
    AuditRecord::from_entry(entry).unwrap()
}

/// Store whose writes always fail.
struct ReadOnlyStore;

impl SettingsStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Poisoned)
    }
    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Poisoned)
    }
}

#[test]
fn appended_entry_is_first_in_local_snapshot() {
    let dir = TempDir::new().unwrap();
    let mut ledger = AuditLedger::open(Arc::new(FileStore::in_dir(dir.path())));
    ledger.append(&entry("older", PolicyAction::Allow));
    let newest = entry("newest", PolicyAction::Block);
    ledger.append(&newest);

    let persisted = ledger.load_local();
    assert_eq!(persisted.first().and_then(AuditRecord::entry), Some(newest));
    assert_eq!(persisted.len(), 2);

    let reopened = AuditLedger::open(Arc::new(FileStore::in_dir(dir.path())));
    assert_eq!(reopened.entries(), persisted.as_slice());
}

#[test]
fn merging_identical_remote_entry_adds_nothing() {
    let mut ledger = AuditLedger::open(Arc::new(MemoryStore::new()));
    let local = entry("same", PolicyAction::Allow);
    ledger.append(&local);

    let merged = ledger.merge_remote(vec![record(&local)]);
    assert_eq!(merged.len(), 1);
}

#[test]
fn merging_disjoint_remote_grows_by_its_length() {
    let mut ledger = AuditLedger::open(Arc::new(MemoryStore::new()));
    ledger.append(&entry("local", PolicyAction::Allow));
    let remote = vec![
        record(&entry("server one", PolicyAction::Allow)),
        record(&entry("server two", PolicyAction::Block)),
    ];

    let merged = ledger.merge_remote(remote);

    let inputs: Vec<_> = merged.iter().filter_map(AuditRecord::input).collect();
    assert_eq!(inputs, vec!["local", "server one", "server two"]);
}

#[test]
fn server_entry_differing_in_one_field_is_kept() {
    let mut ledger = AuditLedger::open(Arc::new(MemoryStore::new()));
    let local = entry("x", PolicyAction::Allow);
    let mut remote = local.clone();
    remote.policy.notes = "server".into();
    ledger.append(&local);
    assert_eq!(ledger.merge_remote(vec![record(&remote)]).len(), 2);
}

#[test]
fn write_failures_are_swallowed() {
    let mut ledger = AuditLedger::open(Arc::new(ReadOnlyStore));
    ledger.append(&entry("kept in memory", PolicyAction::Allow));
    assert_eq!(ledger.len(), 1);
    ledger.clear();
    assert!(ledger.is_empty());
}

#[test]
fn append_after_merge_persists_merged_history() {
    let store = Arc::new(MemoryStore::new());
    let mut ledger = AuditLedger::open(store.clone());
    ledger.merge_remote(vec![record(&entry("server", PolicyAction::Allow))]);
    ledger.append(&entry("local", PolicyAction::Allow));

    let reopened = AuditLedger::open(store);
    let inputs: Vec<_> = reopened.entries().iter().filter_map(AuditRecord::input).collect();
    assert_eq!(inputs, vec!["local", "server"]);
}

#[test]
fn server_history_survives_merge_and_reload_verbatim() {
    let store = Arc::new(MemoryStore::new());
    let mut ledger = AuditLedger::open(store.clone());
    let server = parse_audit_log(serde_json::json!({"items": [
        {"id": 1, "ts": "2025-01-01T00:00:00Z", "input": "same", "policy": {"action": "allow", "policy_mode": "advisory"}},
        {"id": 2, "ts": "2025-01-01T00:00:00Z", "input": "same", "policy": {"action": "allow", "policy_mode": "advisory"}},
        {"ts": "2025-01-02T00:00:00Z", "input": "no policy"},
        {"ts": "2025-01-03T00:00:00Z", "policy": {"action": "warn"}}
    ]}));
    assert_eq!(server.skipped, 0);

    assert_eq!(ledger.merge_remote(server.records.clone()).len(), 4);
    ledger.append(&entry("local", PolicyAction::Allow));

    let reopened = AuditLedger::open(store);
    assert_eq!(reopened.len(), 5);
    assert_eq!(&reopened.entries()[1..], server.records.as_slice());
}
