use std::path::PathBuf;

use anyhow::Context;
use dhll_core::entities::AuditRecord;
use dhll_state::AuditLedger;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportView {
    path: String,
    entries: usize,
}

#[derive(Debug, Serialize)]
struct ClearView {
    cleared: usize,
}

/// Handle `dhll audit`.
pub async fn handle(action: &AuditCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut ledger = ctx.ledger();
    match action {
        AuditCommands::List { limit } => {
            let entries = take_limited(ledger.entries(), limit.or(flags.limit));
            output(&entries, flags.format)
        }
        AuditCommands::Fetch { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.api.audit_limit);
            let items = ctx
                .client()?
                .fetch_audit(limit)
                .await
                .context("failed to fetch server audit log")?;
            let merged = ledger.merge_remote(items.records);
            output(&merged, flags.format)
        }
        AuditCommands::Export { output: path } => {
            merge_server_log(ctx, &mut ledger).await;
            let path = path.as_ref().map_or_else(default_export_path, PathBuf::from);
            write_export(&path, ledger.entries())?;
            let view = ExportView {
                path: path.display().to_string(),
                entries: ledger.len(),
            };
            output(&view, flags.format)
        }
        AuditCommands::Clear => {
            let cleared = ledger.len();
            ledger.clear();
            output(&ClearView { cleared }, flags.format)
        }
    }
}

/// Best effort: an unreachable server still exports the local log.
async fn merge_server_log(ctx: &AppContext, ledger: &mut AuditLedger) {
    let client = match ctx.client() {
        Ok(client) => client,
        Err(error) => {
            tracing::debug!(%error, "exporting local audit log only");
            return;
        }
    };
    match client.fetch_audit(ctx.config.api.export_limit).await {
        Ok(items) => {
            ledger.merge_remote(items.records);
        }
        Err(error) => tracing::warn!(%error, "server audit log unavailable; exporting local log only"),
    }
}

fn default_export_path() -> PathBuf {
    PathBuf::from(
        chrono::Local::now()
            .format("dhll_audit_%Y%m%d_%H%M%S.json")
            .to_string(),
    )
}

fn write_export(path: &std::path::Path, entries: &[AuditRecord]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use dhll_core::entities::{AuditEntry, AuditOptions, AuditResult, PolicyDecision};
    use dhll_core::enums::PolicyAction;
    use dhll_core::wire::parse_audit_log;

    use super::*;

    #[test]
    fn default_export_name_is_timestamped() {
        let name = default_export_path().display().to_string();
        assert!(name.starts_with("dhll_audit_"));
        assert!(name.ends_with(".json"));
        // dhll_audit_YYYYMMDD_HHMMSS.json
        assert_eq!(name.len(), 31);
    }

    #[test]
    fn export_writes_records_verbatim() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("out.json");
        let entry = AuditEntry {
            timestamp: "2025-01-01T00:00:00.000Z".into(),
            input: "hello".into(),
            options: AuditOptions::default(),
            result: AuditResult::default(),
            policy: PolicyDecision {
                action: PolicyAction::Allow,
                policy_mode: "advisory".into(),
                notes: String::new(),
            },
        };
        let records = vec![
            AuditRecord::from_entry(&entry).unwrap(),
            AuditRecord::new(serde_json::json!({"id": 9, "policy": {"action": "warn"}})),
        ];

        write_export(&path, &records).unwrap();

        let body = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let parsed = parse_audit_log(body);
        assert_eq!(parsed.records, records);
        assert_eq!(parsed.records[0].entry(), Some(entry));
        assert_eq!(parsed.skipped, 0);
    }
}
