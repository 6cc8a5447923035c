use dhll_core::entities::{EmbeddedPolicy, PolicyDecision};
use dhll_core::policy::resolve;
use dhll_core::wire::PolicyRequest;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PolicyArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PolicyView {
    outcome: &'static str,
    decision: PolicyDecision,
}

/// Handle `dhll policy`. Without an `/enhance` reply there is no embedded
/// verdict, so fallbacks allow under the requested mode.
pub async fn handle(args: &PolicyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = PolicyRequest {
        text: args.text.clone(),
        mode: args.mode.unwrap_or(ctx.config.defaults.policy_mode),
    };
    let outcome = ctx.client()?.apply_policy(&request).await;
    let embedded = EmbeddedPolicy {
        allowed: true,
        mode: String::new(),
    };
    let view = PolicyView {
        outcome: outcome.kind(),
        decision: resolve(&embedded, request.mode, &outcome),
    };
    output(&view, flags.format)
}
