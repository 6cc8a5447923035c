//! # dhll-client
//!
//! Async HTTP client for the DHLL enhancement service:
//! - `POST /enhance` → normalized [`EnhanceResult`]
//! - `POST /policy/apply` → [`PolicyOutcome`] for the policy resolver
//! - `GET /audit/log?limit=N` → server audit history
//! - `GET /version` → informational service version
//!
//! Only `/enhance` and `/audit/log` surface errors. The policy call always
//! yields an outcome and the version probe yields `None` on any failure.

pub mod base;
pub mod curl;

mod error;
mod http;

pub use error::ClientError;
pub use http::{check_response, classify_policy_response};

use std::time::Duration;

use dhll_core::entities::EnhanceResult;
use dhll_core::normalize::normalize;
use dhll_core::policy::PolicyOutcome;
use dhll_core::wire::{AuditLogItems, EnhanceRequest, PolicyRequest, VersionInfo, parse_audit_log};
use serde_json::Value;

const USER_AGENT: &str = concat!("dhll/", env!("CARGO_PKG_VERSION"));

pub struct DhllClient {
    http: reqwest::Client,
    base: String,
}

impl DhllClient {
    /// Build a client for `base` (already resolved, see [`base::resolve_base`]).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConfigured`] for an empty base and
    /// [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = base::trim_base(base.trim());
        if base.is_empty() {
            return Err(ClientError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base: base.to_string(),
        })
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Send the primary enhancement request and normalize whatever comes back.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status, or
    /// a body that is not JSON.
    pub async fn enhance(&self, request: &EnhanceRequest) -> Result<EnhanceResult, ClientError> {
        let url = self.url("/enhance");
        tracing::debug!(%url, "enhance request");
        let resp = check_response(self.http.post(&url).json(request).send().await?).await?;
        let body: Value = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("enhance response: {e}")))?;
        Ok(normalize(&body))
    }

    /// Best-effort policy check. Never fails; see [`classify_policy_response`].
    pub async fn apply_policy(&self, request: &PolicyRequest) -> PolicyOutcome {
        let url = self.url("/policy/apply");
        tracing::debug!(%url, "policy request");
        match self.http.post(&url).json(request).send().await {
            Ok(resp) => classify_policy_response(resp).await,
            Err(error) => {
                tracing::warn!(%error, "policy request failed");
                PolicyOutcome::NetworkError
            }
        }
    }

    /// Fetch server audit history. Items are kept verbatim; non-object items
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status, or
    /// a body that is not JSON.
    pub async fn fetch_audit(&self, limit: u32) -> Result<AuditLogItems, ClientError> {
        let url = self.url(&format!("/audit/log?limit={limit}"));
        tracing::debug!(%url, "audit log request");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body: Value = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("audit log response: {e}")))?;
        let items = parse_audit_log(body);
        if items.skipped > 0 {
            tracing::warn!(
                skipped = items.skipped,
                reason = items.first_error.as_deref().unwrap_or_default(),
                "skipped malformed server audit items"
            );
        }
        Ok(items)
    }

    /// Service version, or `None` if the probe fails for any reason.
    pub async fn version(&self) -> Option<VersionInfo> {
        match self.fetch_version().await {
            Ok(info) => Some(info),
            Err(error) => {
                tracing::warn!(%error, "version probe failed");
                None
            }
        }
    }

    async fn fetch_version(&self) -> Result<VersionInfo, ClientError> {
        let resp = check_response(self.http.get(self.url("/version")).send().await?).await?;
        Ok(resp.json().await?)
    }
}
