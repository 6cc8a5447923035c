use clap::{Args, Subcommand};
use dhll_core::enums::RatingCode;

/// Parental control commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RatingCommands {
    /// Show the gate state and which ratings are locked.
    Show,
    /// Change the active rating.
    Set {
        code: RatingCode,
        #[command(flatten)]
        answers: ChallengeArgs,
    },
    /// Change the maximum rating (requires the PIN).
    Max {
        code: RatingCode,
        #[command(flatten)]
        answers: ChallengeArgs,
    },
    /// Turn parental control on, or off (requires the PIN once set).
    Toggle {
        #[command(flatten)]
        answers: ChallengeArgs,
    },
}

/// Non-interactive answers to PIN prompts. Anything not given here is asked
/// on the terminal.
#[derive(Clone, Debug, Default, Args)]
pub struct ChallengeArgs {
    /// Parental control PIN (4 digits).
    #[arg(long)]
    pub pin: Option<String>,
    /// Confirmation when a new PIN is being set.
    #[arg(long = "confirm-pin")]
    pub confirm_pin: Option<String>,
    /// Allow the requested rating this time only.
    #[arg(long, conflicts_with = "raise")]
    pub once: bool,
    /// Also raise the maximum rating to the requested one.
    #[arg(long)]
    pub raise: bool,
}
