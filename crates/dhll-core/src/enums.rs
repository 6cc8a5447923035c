//! Rating scale, policy modes and creative modes.
//!
//! All enums serialize to the exact strings the enhancement service and the
//! persisted settings use. Ordering on [`RatingCode`] follows the fixed scale
//! `G < 10+ < 13+ < 16+ < 18+`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RatingCode
// ---------------------------------------------------------------------------

/// Content rating code on the fixed ordered scale.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum RatingCode {
    #[default]
    #[serde(rename = "G")]
    G,
    #[serde(rename = "10+")]
    Ten,
    #[serde(rename = "13+")]
    Thirteen,
    #[serde(rename = "16+")]
    Sixteen,
    #[serde(rename = "18+")]
    Eighteen,
}

impl RatingCode {
    /// Every code, lowest first.
    pub const ALL: [Self; 5] = [
        Self::G,
        Self::Ten,
        Self::Thirteen,
        Self::Sixteen,
        Self::Eighteen,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::G => "G",
            Self::Ten => "10+",
            Self::Thirteen => "13+",
            Self::Sixteen => "16+",
            Self::Eighteen => "18+",
        }
    }

    /// Human-facing label shown in rating pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::G => "G (All ages)",
            other => other.as_str(),
        }
    }

    /// Codes strictly above `cap`. These are locked while parental control is on.
    #[must_use]
    pub fn above(cap: Self) -> Vec<Self> {
        Self::ALL.into_iter().filter(|code| *code > cap).collect()
    }
}

impl fmt::Display for RatingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| {
                code.as_str().eq_ignore_ascii_case(trimmed) || code.label() == trimmed
            })
            .ok_or_else(|| CoreError::UnknownRating(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// PolicyMode
// ---------------------------------------------------------------------------

/// How strictly the backend filters output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PolicyMode {
    Off,
    #[default]
    Advisory,
    Enforce,
}

impl PolicyMode {
    pub const ALL: [Self; 3] = [Self::Off, Self::Advisory, Self::Enforce];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Advisory => "advisory",
            Self::Enforce => "enforce",
        }
    }
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownPolicyMode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CreativeMode
// ---------------------------------------------------------------------------

/// UI-side creative mode, sent to the backend as `options.dhll_mode`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CreativeMode {
    Off,
    Minimal,
    #[default]
    Full,
    Tech,
    Artistic,
}

impl CreativeMode {
    pub const ALL: [Self; 5] = [
        Self::Off,
        Self::Minimal,
        Self::Full,
        Self::Tech,
        Self::Artistic,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Minimal => "minimal",
            Self::Full => "full",
            Self::Tech => "tech",
            Self::Artistic => "artistic",
        }
    }
}

impl fmt::Display for CreativeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreativeMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownCreativeMode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// PolicyAction
// ---------------------------------------------------------------------------

/// Final allow/block verdict of a policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PolicyAction {
    Allow,
    Block,
}

impl PolicyAction {
    #[must_use]
    pub const fn from_allowed(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Block }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
