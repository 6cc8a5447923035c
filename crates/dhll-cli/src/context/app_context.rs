use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use dhll_client::DhllClient;
use dhll_client::base::resolve_base;
use dhll_config::DhllConfig;
use dhll_state::keys;
use dhll_state::{AuditLedger, FileStore, RatingGate, SettingsStore};

/// Configuration plus the persisted settings store, shared by every command.
pub struct AppContext {
    pub config: DhllConfig,
    pub storage_dir: PathBuf,
    pub store: Arc<FileStore>,
}

impl AppContext {
    /// Load layered configuration (with `.env`) and open storage.
    pub fn load() -> anyhow::Result<Self> {
        let config = DhllConfig::load_with_dotenv().context("failed to load configuration")?;
        Self::init(config)
    }

    pub fn init(config: DhllConfig) -> anyhow::Result<Self> {
        let storage_dir = config
            .storage
            .resolve_dir()
            .context("no platform data directory; set storage.dir or DHLL_STORAGE__DIR")?;
        let store = Arc::new(FileStore::in_dir(&storage_dir));
        super::warn_unconfigured(&config);
        Ok(Self {
            config,
            storage_dir,
            store,
        })
    }

    /// Persisted `dhll_api_base` override, if any.
    pub fn api_base_override(&self) -> Option<String> {
        match self.store.get(keys::API_BASE) {
            Ok(value) => value.filter(|base| !base.trim().is_empty()),
            Err(error) => {
                tracing::warn!(%error, "failed to read API base override");
                None
            }
        }
    }

    /// Base URL for this call: the override, else `api.base_url`.
    pub fn api_base(&self) -> String {
        resolve_base(
            self.api_base_override().as_deref(),
            &self.config.api.base_url,
        )
    }

    pub fn client(&self) -> anyhow::Result<DhllClient> {
        let timeout = Duration::from_secs(self.config.api.timeout_secs);
        Ok(DhllClient::new(&self.api_base(), timeout)?)
    }

    pub fn ledger(&self) -> AuditLedger {
        AuditLedger::open(self.shared_store())
    }

    pub fn gate(&self) -> RatingGate {
        RatingGate::open(self.shared_store())
    }

    fn shared_store(&self) -> Arc<dyn SettingsStore> {
        self.store.clone()
    }
}
