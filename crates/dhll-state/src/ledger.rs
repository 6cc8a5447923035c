//! Session audit ledger.
//!
//! An ordered, deduplicated log of enhancement attempts. Local appends go to
//! the front (newest first) and are persisted under
//! [`keys::SESSION_AUDIT`](crate::keys::SESSION_AUDIT) as a JSON array.
//! Server history merged in with [`AuditLedger::merge_remote`] lives in memory
//! only; it is written out with the next local append.
//!
//! Records are held as raw JSON, so server items keep every field they
//! arrived with.

use std::collections::HashSet;
use std::sync::Arc;

use dhll_core::entities::{AuditEntry, AuditRecord};
use dhll_core::wire::parse_audit_log;

use crate::keys;
use crate::store::SettingsStore;

pub struct AuditLedger {
    store: Arc<dyn SettingsStore>,
    entries: Vec<AuditRecord>,
}

impl AuditLedger {
    /// Create a ledger hydrated from the persisted snapshot.
    #[must_use]
    pub fn open(store: Arc<dyn SettingsStore>) -> Self {
        let entries = read_snapshot(store.as_ref());
        Self { store, entries }
    }

    /// Re-read the persisted snapshot. Missing or corrupt data yields an
    /// empty sequence.
    #[must_use]
    pub fn load_local(&self) -> Vec<AuditRecord> {
        read_snapshot(self.store.as_ref())
    }

    /// Current in-memory sequence.
    #[must_use]
    pub fn entries(&self) -> &[AuditRecord] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend `entry` and persist the full sequence.
    pub fn append(&mut self, entry: &AuditEntry) {
        match AuditRecord::from_entry(entry) {
            Ok(record) => self.entries.insert(0, record),
            Err(error) => {
                tracing::warn!(%error, "failed to serialize audit entry; not recorded");
                return;
            }
        }
        self.persist();
    }

    /// Concatenate the current entries with `server_entries`, dropping
    /// structural duplicates while keeping first-seen order.
    pub fn merge_remote(&mut self, server_entries: Vec<AuditRecord>) -> &[AuditRecord] {
        let combined = std::mem::take(&mut self.entries)
            .into_iter()
            .chain(server_entries);
        self.entries = dedup(combined);
        &self.entries
    }

    /// Empty the ledger and erase the persisted snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(error) = self.store.remove(keys::SESSION_AUDIT) {
            tracing::warn!(%error, "failed to erase persisted audit log");
        }
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize audit log");
                return;
            }
        };
        if let Err(error) = self.store.set(keys::SESSION_AUDIT, &json) {
            tracing::warn!(%error, "failed to persist audit log");
        }
    }
}

fn dedup(entries: impl IntoIterator<Item = AuditRecord>) -> Vec<AuditRecord> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.identity_key()))
        .collect()
}

fn read_snapshot(store: &dyn SettingsStore) -> Vec<AuditRecord> {
    let raw = match store.get(keys::SESSION_AUDIT) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(%error, "failed to read persisted audit log");
            return Vec::new();
        }
    };
    let value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, "persisted audit log is corrupt; ignoring it");
            return Vec::new();
        }
    };
    let parsed = parse_audit_log(value);
    if parsed.skipped > 0 {
        tracing::warn!(
            skipped = parsed.skipped,
            reason = parsed.first_error.as_deref().unwrap_or_default(),
            "dropped unreadable persisted audit entries"
        );
    }
    parsed.records
}
