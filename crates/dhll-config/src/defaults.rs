//! Default request options used when a command does not override them.

use dhll_core::catalog::CULTURE_NONE;
use dhll_core::enums::{CreativeMode, PolicyMode};
use serde::{Deserialize, Serialize};

fn default_tone() -> String {
    String::from("neutral")
}

fn default_culture() -> String {
    String::from(CULTURE_NONE)
}

const fn default_auto_detect() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub policy_mode: PolicyMode,

    #[serde(default)]
    pub ui_mode: CreativeMode,

    #[serde(default = "default_tone")]
    pub tone: String,

    #[serde(default = "default_culture")]
    pub culture: String,

    /// Detect circumstance tags from keywords in the input text.
    #[serde(default = "default_auto_detect")]
    pub auto_detect: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            policy_mode: PolicyMode::default(),
            ui_mode: CreativeMode::default(),
            tone: default_tone(),
            culture: default_culture(),
            auto_detect: default_auto_detect(),
        }
    }
}
