use dhll_client::curl::{SAMPLE_TEXT, audit_command, enhance_command, policy_command};
use dhll_core::wire::PolicyRequest;

use crate::cli::subcommands::CurlCommands;
use crate::commands::shared::request::build_enhance_request;
use crate::context::AppContext;

/// Handle `dhll curl`. Prints the bare command so it can be piped to a shell.
pub fn handle(action: &CurlCommands, ctx: &AppContext) -> anyhow::Result<()> {
    let base = ctx.api_base();
    if base.is_empty() {
        tracing::warn!("API base URL not configured; the command has no host");
    }

    let command = match action {
        CurlCommands::Enhance { text, options } => {
            let text = text.as_deref().unwrap_or(SAMPLE_TEXT);
            let active = ctx.gate().active();
            let request = build_enhance_request(text, options, &ctx.config.defaults, Some(active));
            enhance_command(&base, &request)?
        }
        CurlCommands::Policy { text, mode } => {
            let request = PolicyRequest {
                text: text.clone().unwrap_or_else(|| SAMPLE_TEXT.to_string()),
                mode: mode.unwrap_or(ctx.config.defaults.policy_mode),
            };
            policy_command(&base, &request)?
        }
        CurlCommands::Audit { limit } => {
            audit_command(&base, limit.unwrap_or(ctx.config.api.audit_limit))
        }
    };
    println!("{command}");
    Ok(())
}
