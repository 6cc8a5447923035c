use clap::Subcommand;

/// Session audit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// Show the locally recorded log, newest first.
    List {
        /// Maximum number of entries.
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Merge the server's audit log into the session view.
    Fetch {
        /// `limit` sent to the server (defaults to api.audit_limit).
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Write the session log, merged with the server's, to a JSON file.
    Export {
        /// Output path (defaults to dhll_audit_YYYYMMDD_HHMMSS.json).
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Erase the session log.
    Clear,
}
