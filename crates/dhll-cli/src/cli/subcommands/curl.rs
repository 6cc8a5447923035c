use clap::Subcommand;
use dhll_core::enums::PolicyMode;

use crate::cli::root_commands::EnhanceOptionArgs;

/// curl command builders.
#[derive(Clone, Debug, Subcommand)]
pub enum CurlCommands {
    /// `POST /enhance`
    Enhance {
        /// Text to send (a sample sentence when omitted).
        text: Option<String>,
        #[command(flatten)]
        options: EnhanceOptionArgs,
    },
    /// `POST /policy/apply`
    Policy {
        text: Option<String>,
        #[arg(long)]
        mode: Option<PolicyMode>,
    },
    /// `GET /audit/log`
    Audit {
        #[arg(long)]
        limit: Option<u32>,
    },
}
