//! Domain records: normalized enhancement results, policy decisions and the
//! audit entries that fold both together.

use chrono::{SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::PolicyAction;

/// Policy signal embedded in an `/enhance` reply.
///
/// An empty `mode` means the reply did not name one; resolvers fall back to
/// the requested mode in that case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmbeddedPolicy {
    pub allowed: bool,
    pub mode: String,
}

impl Default for EmbeddedPolicy {
    fn default() -> Self {
        Self {
            allowed: true,
            mode: String::from("advisory"),
        }
    }
}

/// Canonical form of an `/enhance` reply, whatever shape the backend used.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnhanceResult {
    pub enriched: String,
    pub tags: Vec<String>,
    pub rationale: String,
    pub actions: Vec<String>,
    pub policy_result: EmbeddedPolicy,
}

/// Allow/block verdict with provenance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PolicyDecision {
    pub action: PolicyAction,
    pub policy_mode: String,
    #[serde(default)]
    pub notes: String,
}

/// Options recorded with an audit entry, as they were sent to `/enhance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditOptions {
    /// Policy mode (`off`/`advisory`/`enforce`).
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub culture: String,
    #[serde(default)]
    pub environment: Vec<String>,
    /// Creative mode.
    #[serde(default, rename = "dhll_mode")]
    pub ui_mode: String,
}

/// Output portion of an audit entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditResult {
    #[serde(default)]
    pub enriched: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl From<&EnhanceResult> for AuditResult {
    fn from(result: &EnhanceResult) -> Self {
        Self {
            enriched: result.enriched.clone(),
            tags: result.tags.clone(),
            rationale: result.rationale.clone(),
            actions: result.actions.clone(),
        }
    }
}

/// One recorded enhancement attempt.
///
/// Two entries are the same record iff their serialized form is identical;
/// see [`AuditRecord::identity_key`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditEntry {
    /// ISO-8601 timestamp.
    #[serde(rename = "ts", alias = "timestamp")]
    pub timestamp: String,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub options: AuditOptions,
    #[serde(default)]
    pub result: AuditResult,
    pub policy: PolicyDecision,
}

impl AuditEntry {
    /// Build an entry stamped with the current time.
    #[must_use]
    pub fn record(
        input: impl Into<String>,
        options: AuditOptions,
        result: &EnhanceResult,
        policy: PolicyDecision,
    ) -> Self {
        Self {
            timestamp: now_iso8601(),
            input: input.into(),
            options,
            result: AuditResult::from(result),
            policy,
        }
    }

}

/// One audit log item exactly as persisted or served.
///
/// Server items are kept verbatim, including fields and actions this client
/// does not model, so nothing is lost on merge or export. Two records are the
/// same record iff their compact serializations are identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditRecord(Value);

impl AuditRecord {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Snapshot of a locally recorded entry.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `entry` cannot be turned into JSON.
    pub fn from_entry(entry: &AuditEntry) -> Result<Self, serde_json::Error> {
        serde_json::to_value(entry).map(Self)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Dedup key: the compact JSON serialization.
    #[must_use]
    pub fn identity_key(&self) -> String {
        self.0.to_string()
    }

    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.0.get("input").and_then(Value::as_str)
    }

    /// Typed view, when the record has the shape this client writes.
    #[must_use]
    pub fn entry(&self) -> Option<AuditEntry> {
        AuditEntry::deserialize(&self.0).ok()
    }
}

/// Current UTC time in the `2024-01-02T03:04:05.678Z` form.
#[must_use]
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
