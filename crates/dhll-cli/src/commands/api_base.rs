use anyhow::Context;
use dhll_client::base::trim_base;
use dhll_state::{SettingsStore, keys};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ApiBaseArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ApiBaseView {
    #[serde(rename = "override")]
    override_base: Option<String>,
    configured: String,
    effective: String,
}

/// Handle `dhll api-base`.
pub fn handle(args: &ApiBaseArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.clear {
        ctx.store
            .remove(keys::API_BASE)
            .context("failed to clear API base override")?;
    } else if let Some(url) = &args.url {
        let base = normalize_override(url)?;
        ctx.store
            .set(keys::API_BASE, &base)
            .context("failed to persist API base override")?;
    }

    let view = ApiBaseView {
        override_base: ctx.api_base_override(),
        configured: ctx.config.api.base_url.clone(),
        effective: ctx.api_base(),
    };
    output(&view, flags.format)
}

fn normalize_override(url: &str) -> anyhow::Result<String> {
    let trimmed = url.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        anyhow::bail!("API base must start with http:// or https://, got '{trimmed}'");
    }
    Ok(trim_base(trimmed).to_string())
}
