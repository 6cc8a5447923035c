//! Local persistence location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding `settings.json` and the in-flight lock.
    /// Empty means the platform data directory (`~/.local/share/dhll` on Linux).
    #[serde(default)]
    pub dir: String,
}

impl StorageConfig {
    /// The effective storage directory, or `None` when no data directory exists.
    #[must_use]
    pub fn resolve_dir(&self) -> Option<PathBuf> {
        if self.dir.trim().is_empty() {
            dirs::data_dir().map(|p| p.join("dhll"))
        } else {
            Some(PathBuf::from(self.dir.trim()))
        }
    }
}
