//! Enhancement service endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_audit_limit() -> u32 {
    50
}

const fn default_export_limit() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the enhancement service (e.g. `https://api.example.com`).
    #[serde(default)]
    pub base_url: String,

    /// Transport timeout applied to every request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `limit` sent to `GET /audit/log`.
    #[serde(default = "default_audit_limit")]
    pub audit_limit: u32,

    /// `limit` used when exporting the merged audit log.
    #[serde(default = "default_export_limit")]
    pub export_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
            audit_limit: default_audit_limit(),
            export_limit: default_export_limit(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Reject values that can never produce a working client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-HTTP base URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if !base.is_empty() && !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{base}' must start with http:// or https://"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
