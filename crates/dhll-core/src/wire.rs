//! Request and response bodies exchanged with the enhancement service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::AuditRecord;
use crate::enums::{CreativeMode, PolicyMode, RatingCode};

/// `options` object of an `/enhance` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceOptions {
    pub tone: String,
    pub environment: Vec<String>,
    pub dhll_mode: CreativeMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_rating: Option<RatingCode>,
}

/// Body of `POST {base}/enhance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceRequest {
    pub text: String,
    /// Policy mode.
    pub mode: PolicyMode,
    pub culture: String,
    pub options: EnhanceOptions,
}

impl EnhanceRequest {
    /// Body for the follow-up `/policy/apply` call.
    #[must_use]
    pub fn policy_request(&self) -> PolicyRequest {
        PolicyRequest {
            text: self.text.clone(),
            mode: self.mode,
        }
    }
}

/// Body of `POST {base}/policy/apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRequest {
    pub text: String,
    pub mode: PolicyMode,
}

/// Reply of `GET {base}/version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub sha: Option<String>,
}

impl VersionInfo {
    /// `"{service} {version}[ · {sha}]"`, service defaulting to `dhll`.
    #[must_use]
    pub fn display_line(&self) -> String {
        let service = self.service.as_deref().unwrap_or("dhll");
        let version = self.version.as_deref().unwrap_or_default();
        match self.sha.as_deref().filter(|sha| !sha.is_empty()) {
            Some(sha) => format!("{service} {version} · {sha}"),
            None => format!("{service} {version}"),
        }
    }
}

/// Items read out of a `GET /audit/log` reply or the persisted session log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLogItems {
    pub records: Vec<AuditRecord>,
    /// Items that were not JSON objects.
    pub skipped: usize,
    /// Why the first skipped item was rejected.
    pub first_error: Option<String>,
}

/// Accept `{ "items": [...] }` or a bare array. Any other body yields no items.
///
/// Every object item is kept verbatim; anything else is skipped.
#[must_use]
pub fn parse_audit_log(body: Value) -> AuditLogItems {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let mut parsed = AuditLogItems::default();
    for (index, item) in items.into_iter().enumerate() {
        if item.is_object() {
            parsed.records.push(AuditRecord::new(item));
            continue;
        }
        parsed.skipped += 1;
        if parsed.first_error.is_none() {
            parsed.first_error = Some(format!(
                "item {index}: expected an object, found {}",
                json_kind(&item)
            ));
        }
    }
    parsed
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
