use clap::{Args, Subcommand, ValueEnum};
use dhll_core::enums::{CreativeMode, PolicyMode, RatingCode};

use crate::cli::subcommands::{
    AuditCommands, ChallengeArgs, CurlCommands, RatingCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Enhance text, check it against policy, and record it in the session audit log.
    Enhance(EnhanceArgs),
    /// Run only the policy check for a text.
    Policy(PolicyArgs),
    /// Session audit log.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Parental control over the content rating.
    Rating {
        #[command(subcommand)]
        action: RatingCommands,
    },
    /// Show, set, or clear the persisted API base override.
    #[command(name = "api-base")]
    ApiBase(ApiBaseArgs),
    /// Show the enhancement service version.
    Version,
    /// Print the equivalent curl command for an API call.
    Curl {
        #[command(subcommand)]
        action: CurlCommands,
    },
    /// List selectable tones, cultures, circumstances, or ratings.
    Catalog(CatalogArgs),
    /// Show the circumstance tags detected in a text.
    Detect(DetectArgs),
}

/// Request options shared by `dhll enhance` and `dhll curl enhance`.
#[derive(Clone, Debug, Default, Args)]
pub struct EnhanceOptionArgs {
    /// Policy mode: off, advisory, enforce
    #[arg(long)]
    pub mode: Option<PolicyMode>,
    /// Creative mode: off, minimal, full, tech, artistic
    #[arg(long = "ui-mode")]
    pub ui_mode: Option<CreativeMode>,
    /// Tone value (see `dhll catalog tones`)
    #[arg(long)]
    pub tone: Option<String>,
    /// Culture value (see `dhll catalog cultures`)
    #[arg(long)]
    pub culture: Option<String>,
    /// Circumstance tag; repeatable
    #[arg(long = "env", short = 'e')]
    pub env: Vec<String>,
    /// Do not add circumstance tags detected in the text
    #[arg(long)]
    pub no_auto_detect: bool,
}

/// Arguments for `dhll enhance`.
#[derive(Clone, Debug, Args)]
pub struct EnhanceArgs {
    /// Text to enhance.
    pub text: String,
    #[command(flatten)]
    pub options: EnhanceOptionArgs,
    /// Switch the active content rating before sending (PIN protocol applies).
    #[arg(long)]
    pub rating: Option<RatingCode>,
    #[command(flatten)]
    pub answers: ChallengeArgs,
}

/// Arguments for `dhll policy`.
#[derive(Clone, Debug, Args)]
pub struct PolicyArgs {
    /// Text to check.
    pub text: String,
    /// Policy mode: off, advisory, enforce
    #[arg(long)]
    pub mode: Option<PolicyMode>,
}

/// Arguments for `dhll api-base`.
#[derive(Clone, Debug, Args)]
pub struct ApiBaseArgs {
    /// New base URL to persist.
    #[arg(conflicts_with = "clear")]
    pub url: Option<String>,
    /// Remove the persisted override.
    #[arg(long)]
    pub clear: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CatalogKind {
    Tones,
    Cultures,
    Circumstances,
    Ratings,
}

/// Arguments for `dhll catalog`.
#[derive(Clone, Debug, Args)]
pub struct CatalogArgs {
    pub kind: CatalogKind,
}

/// Arguments for `dhll detect`.
#[derive(Clone, Debug, Args)]
pub struct DetectArgs {
    pub text: String,
}
