//! Response classification shared by the endpoint calls.

use dhll_core::policy::{PolicyOutcome, PolicyPayload};
use serde_json::Value;

use crate::error::ClientError;

/// Pass a success response through; turn anything else into
/// [`ClientError::Api`] carrying the status and body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Map a `/policy/apply` response onto the resolver's outcome.
///
/// 404 means the deployment has no policy endpoint. A 2xx whose body is not
/// JSON, or is JSON `null`, counts as a network failure.
pub async fn classify_policy_response(resp: reqwest::Response) -> PolicyOutcome {
    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return PolicyOutcome::NotFound;
    }
    if !status.is_success() {
        return PolicyOutcome::HttpError(status.as_u16());
    }
    match resp.json::<Value>().await {
        Ok(body) => PolicyPayload::from_value(&body).map_or(PolicyOutcome::NetworkError, PolicyOutcome::Ok),
        Err(error) => {
            tracing::warn!(%error, "unreadable policy response body");
            PolicyOutcome::NetworkError
        }
    }
}
