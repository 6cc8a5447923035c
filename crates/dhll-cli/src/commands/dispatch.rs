use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module. Offline
/// commands run without loading configuration or touching storage.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Catalog(args) => commands::catalog::handle(&args, flags),
        Commands::Detect(args) => commands::catalog::handle_detect(&args, flags),
        Commands::Enhance(args) => {
            commands::enhance::handle(&args, &AppContext::load()?, flags).await
        }
        Commands::Policy(args) => commands::policy::handle(&args, &AppContext::load()?, flags).await,
        Commands::Audit { action } => {
            commands::audit::handle(&action, &AppContext::load()?, flags).await
        }
        Commands::Rating { action } => commands::rating::handle(&action, &AppContext::load()?, flags),
        Commands::ApiBase(args) => commands::api_base::handle(&args, &AppContext::load()?, flags),
        Commands::Version => commands::version::handle(&AppContext::load()?, flags).await,
        Commands::Curl { action } => commands::curl::handle(&action, &AppContext::load()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::cli::root_commands::{CatalogArgs, CatalogKind, DetectArgs};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: true,
            verbose: false,
        }
    }

    #[tokio::test]
    async fn offline_commands_need_no_context() {
        let catalog = Commands::Catalog(CatalogArgs {
            kind: CatalogKind::Ratings,
        });
        let detect = Commands::Detect(DetectArgs {
            text: "rainy beach".into(),
        });
        assert!(dispatch(catalog, &flags()).await.is_ok());
        assert!(dispatch(detect, &flags()).await.is_ok());
    }
}
