//! One enhancement attempt: `/enhance`, then `/policy/apply`, then the
//! resolved decision folded into an audit entry at the head of the ledger.

use dhll_client::{ClientError, DhllClient};
use dhll_core::entities::{AuditEntry, AuditOptions, EnhanceResult, PolicyDecision};
use dhll_core::policy::{PolicyOutcome, resolve};
use dhll_core::wire::{EnhanceRequest, PolicyRequest};
use dhll_state::AuditLedger;
use serde::Serialize;

/// The two service calls an enhancement needs.
pub(crate) trait Backend {
    async fn enhance(&self, request: &EnhanceRequest) -> Result<EnhanceResult, ClientError>;
    async fn apply_policy(&self, request: &PolicyRequest) -> PolicyOutcome;
}

impl Backend for DhllClient {
    async fn enhance(&self, request: &EnhanceRequest) -> Result<EnhanceResult, ClientError> {
        Self::enhance(self, request).await
    }

    async fn apply_policy(&self, request: &PolicyRequest) -> PolicyOutcome {
        Self::apply_policy(self, request).await
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnhanceOutcome {
    pub result: EnhanceResult,
    pub policy: PolicyDecision,
}

/// Run one attempt. A failed `/enhance` records nothing; a failed policy
/// call falls back to the embedded verdict.
pub async fn run_enhance<B: Backend>(
    backend: &B,
    ledger: &mut AuditLedger,
    request: &EnhanceRequest,
) -> anyhow::Result<EnhanceOutcome> {
    let result = match backend.enhance(request).await {
        Ok(result) => result,
        Err(error) => {
            return Err(match error.status() {
                Some(status) => anyhow::anyhow!("Enhance failed: {status}"),
                None => anyhow::Error::new(error).context("Enhance failed"),
            });
        }
    };

    let outcome = backend.apply_policy(&request.policy_request()).await;
    if !matches!(outcome, PolicyOutcome::Ok(_)) {
        tracing::warn!(outcome = outcome.kind(), "policy check unavailable; using embedded verdict");
    }
    let policy = resolve(&result.policy_result, request.mode, &outcome);
    tracing::debug!(action = %policy.action, mode = %policy.policy_mode, "policy resolved");

    ledger.append(&AuditEntry::record(
        request.text.clone(),
        audit_options(request),
        &result,
        policy.clone(),
    ));

    Ok(EnhanceOutcome { result, policy })
}

fn audit_options(request: &EnhanceRequest) -> AuditOptions {
    AuditOptions {
        mode: request.mode.as_str().to_string(),
        tone: request.options.tone.clone(),
        culture: request.culture.clone(),
        environment: request.options.environment.clone(),
        ui_mode: request.options.dhll_mode.as_str().to_string(),
    }
}
