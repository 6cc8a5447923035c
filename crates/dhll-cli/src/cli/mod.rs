use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dhll` binary.
#[derive(Debug, Parser)]
#[command(
    name = "dhll",
    version,
    about = "DHLL - text enhancement with policy checks and parental rating control"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use dhll_core::enums::{PolicyMode, RatingCode};

    use super::subcommands::{AuditCommands, CurlCommands, RatingCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["dhll", "--format", "table", "--limit", "5", "version"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(5));
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dhll", "audit", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Audit {
                action: AuditCommands::List { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["dhll", "--format", "xml", "version"]).is_err());
    }

    #[test]
    fn enhance_parses_options() {
        let cli = Cli::try_parse_from([
            "dhll",
            "enhance",
            "Rainy night",
            "--mode",
            "enforce",
            "--env",
            "occ_party",
            "--env",
            "loc_beach",
            "--no-auto-detect",
            "--rating",
            "13+",
        ])
        .expect("cli should parse");
        let Commands::Enhance(args) = cli.command else {
            panic!("expected enhance");
        };
        assert_eq!(args.text, "Rainy night");
        assert_eq!(args.options.mode, Some(PolicyMode::Enforce));
        assert_eq!(args.options.env, vec!["occ_party", "loc_beach"]);
        assert!(args.options.no_auto_detect);
        assert_eq!(args.rating, Some(RatingCode::Thirteen));
    }

    #[test]
    fn rating_set_takes_pin_flags() {
        let cli = Cli::try_parse_from(["dhll", "rating", "set", "18+", "--pin", "1234", "--once"])
            .expect("cli should parse");
        let Commands::Rating {
            action: RatingCommands::Set { code, answers },
        } = cli.command
        else {
            panic!("expected rating set");
        };
        assert_eq!(code, RatingCode::Eighteen);
        assert_eq!(answers.pin.as_deref(), Some("1234"));
        assert!(answers.once);
    }

    #[test]
    fn once_and_raise_conflict() {
        let parsed =
            Cli::try_parse_from(["dhll", "rating", "set", "18+", "--once", "--raise"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_rating_code_is_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["dhll", "rating", "max", "21+"]).is_err());
    }

    #[test]
    fn curl_enhance_text_is_optional() {
        let cli = Cli::try_parse_from(["dhll", "curl", "enhance"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Curl {
                action: CurlCommands::Enhance { text: None, .. }
            }
        ));
    }
}
