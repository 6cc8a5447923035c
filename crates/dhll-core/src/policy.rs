//! Policy resolution with a graceful-degradation ladder.
//!
//! The `/policy/apply` call is advisory. Whatever happens to it, a decision is
//! always produced, falling back to the policy signal embedded in the
//! `/enhance` reply:
//!
//! | Outcome        | action                              | notes                               |
//! |----------------|-------------------------------------|-------------------------------------|
//! | `Ok(payload)`  | block iff `payload.allowed == false`| `payload.reason` or empty           |
//! | `NotFound`     | embedded `allowed`                  | `policy_endpoint_missing_fallback`  |
//! | `HttpError(s)` | embedded `allowed`                  | `policy_http_{s}`                   |
//! | `NetworkError` | embedded `allowed`                  | `policy_network_fallback`           |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{EmbeddedPolicy, PolicyDecision};
use crate::enums::{PolicyAction, PolicyMode};
use crate::normalize::{coerce_string, is_truthy};

pub const NOTE_ENDPOINT_MISSING: &str = "policy_endpoint_missing_fallback";
pub const NOTE_NETWORK_FALLBACK: &str = "policy_network_fallback";

/// Body of a successful `/policy/apply` reply. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyPayload {
    pub allowed: Option<bool>,
    pub mode: Option<String>,
    pub reason: Option<String>,
}

impl PolicyPayload {
    /// Read a payload out of an arbitrary JSON body.
    ///
    /// Returns `None` for a `null` body. Only a literal `false` counts as a
    /// refusal; empty `mode`/`reason` read as absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        let text_field = |key: &str| {
            value
                .get(key)
                .filter(|v| is_truthy(v))
                .map(coerce_string)
        };
        Some(Self {
            allowed: value.get("allowed").and_then(Value::as_bool),
            mode: text_field("mode"),
            reason: text_field("reason"),
        })
    }
}

/// What happened to the `/policy/apply` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyOutcome {
    /// 2xx with a readable body.
    Ok(PolicyPayload),
    /// HTTP 404: the deployment has no policy endpoint.
    NotFound,
    /// Any other non-2xx status.
    HttpError(u16),
    /// Transport failure or unreadable body.
    NetworkError,
}

impl PolicyOutcome {
    /// Short label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ok(_) => "ok",
            Self::NotFound => "not_found",
            Self::HttpError(_) => "http_error",
            Self::NetworkError => "network_error",
        }
    }
}

/// Derive the canonical decision. Total: never fails.
#[must_use]
pub fn resolve(
    embedded: &EmbeddedPolicy,
    requested: PolicyMode,
    outcome: &PolicyOutcome,
) -> PolicyDecision {
    match outcome {
        PolicyOutcome::Ok(payload) => PolicyDecision {
            action: PolicyAction::from_allowed(payload.allowed != Some(false)),
            policy_mode: payload
                .mode
                .clone()
                .filter(|mode| !mode.is_empty())
                .unwrap_or_else(|| requested.as_str().to_string()),
            notes: payload.reason.clone().unwrap_or_default(),
        },
        PolicyOutcome::NotFound => fallback(embedded, requested, NOTE_ENDPOINT_MISSING.into()),
        PolicyOutcome::HttpError(status) => {
            fallback(embedded, requested, format!("policy_http_{status}"))
        }
        PolicyOutcome::NetworkError => {
            fallback(embedded, requested, NOTE_NETWORK_FALLBACK.into())
        }
    }
}

fn fallback(embedded: &EmbeddedPolicy, requested: PolicyMode, notes: String) -> PolicyDecision {
    let policy_mode = if embedded.mode.is_empty() {
        requested.as_str().to_string()
    } else {
        embedded.mode.clone()
    };
    PolicyDecision {
        action: PolicyAction::from_allowed(embedded.allowed),
        policy_mode,
        notes,
    }
}
