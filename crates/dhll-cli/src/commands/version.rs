use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct VersionView {
    cli: &'static str,
    service: String,
}

/// Handle `dhll version`. The service line is informational and reads
/// `unavailable` on any failure.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = match ctx.client() {
        Ok(client) => client.version().await.map(|info| info.display_line()),
        Err(error) => {
            tracing::debug!(%error, "no client for version probe");
            None
        }
    };
    let view = VersionView {
        cli: env!("CARGO_PKG_VERSION"),
        service: service.unwrap_or_else(|| String::from("unavailable")),
    };
    output(&view, flags.format)
}
