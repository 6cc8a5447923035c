//! # dhll-config
//!
//! Layered configuration loading for the DHLL client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DHLL_*` prefix, `__` as separator)
//! 2. Project-level `.dhll/config.toml`
//! 3. User-level `~/.config/dhll/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DHLL_API__BASE_URL` -> `api.base_url`,
//! `DHLL_DEFAULTS__POLICY_MODE` -> `defaults.policy_mode`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dhll_config::DhllConfig;
//!
//! let config = DhllConfig::load_with_dotenv().expect("config");
//! if config.api.is_configured() {
//!     println!("API base: {}", config.api.base_url);
//! }
//! ```

mod api;
mod defaults;
mod error;
mod storage;

pub use api::ApiConfig;
pub use defaults::DefaultsConfig;
pub use error::ConfigError;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".dhll/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DhllConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl DhllConfig {
    /// Load configuration from TOML files and environment variables, then validate.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The standard provider chain (user-global file, project file, env).
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_from_paths(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_PATH),
        )
    }

    /// Provider chain over explicit file locations. Missing files are skipped.
    #[must_use]
    pub fn figment_from_paths(global: Option<&Path>, local: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global) = global {
            if global.exists() {
                figment = figment.merge(Toml::file(global));
            }
        }

        if local.exists() {
            figment = figment.merge(Toml::file(local));
        }

        figment.merge(Env::prefixed("DHLL_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dhll").join("config.toml"))
    }
}
