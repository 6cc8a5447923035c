//! Copy-as-cURL command builders.

use serde::Serialize;

use dhll_core::wire::{EnhanceRequest, PolicyRequest};

use crate::error::ClientError;

/// Text used when a cURL command is requested without input.
pub const SAMPLE_TEXT: &str = "Rainy   night   outdoor   party!!!";

/// Make `s` safe inside a single-quoted shell string.
#[must_use]
pub fn shell_escape_single_quotes(s: &str) -> String {
    s.replace('\'', r"'\''")
}

/// # Errors
///
/// Returns [`ClientError::Encode`] if the request cannot be serialized.
pub fn enhance_command(base: &str, request: &EnhanceRequest) -> Result<String, ClientError> {
    post_command(&format!("{base}/enhance"), request)
}

/// # Errors
///
/// Returns [`ClientError::Encode`] if the request cannot be serialized.
pub fn policy_command(base: &str, request: &PolicyRequest) -> Result<String, ClientError> {
    post_command(&format!("{base}/policy/apply"), request)
}

#[must_use]
pub fn audit_command(base: &str, limit: u32) -> String {
    format!("curl -s '{base}/audit/log?limit={limit}'")
}

fn post_command<T: Serialize>(url: &str, body: &T) -> Result<String, ClientError> {
    let json = serde_json::to_string(body)?;
    Ok(format!(
        "curl -s '{url}' -X POST -H 'Content-Type: application/json' -d '{}'",
        shell_escape_single_quotes(&json)
    ))
}
