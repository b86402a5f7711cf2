//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read endpoint overrides from flags or their environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve endpoints (see `api_endpoints_config`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use api_endpoints_config::constants::DEFAULT_SOURCE_ROOT;

#[derive(Parser)]
#[command(name = "api-endpoints")]
#[command(about = "Resolve, check, and apply the frontend API endpoint configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  api-endpoints show\n  VITE_API_BASE=https://example.com/api api-endpoints show -o json\n  api-endpoints --mode production check\n  api-endpoints rewrite src --dry-run\n"
)]
pub struct Cli {
    /// API base URL override (e.g., https://example.com/api)
    #[arg(long, global = true, env = "VITE_API_BASE", value_name = "URL")]
    pub api_base: Option<String>,

    /// Build/runtime mode label (defaults to development or production by build type)
    #[arg(long, global = true, env = "APP_MODE")]
    pub mode: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log output format (logs always go to stderr; filter with RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved API base URL, backend URL, and mode
    Show,

    /// Validate the resolved endpoints
    Check,

    /// Replace hardcoded localhost backend URLs in .js/.jsx sources
    Rewrite {
        /// Source root to scan
        #[arg(default_value = DEFAULT_SOURCE_ROOT)]
        root: PathBuf,

        /// Report files that would change without writing them
        #[arg(long)]
        dry_run: bool,
    },
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rewrite_defaults() {
        let cli = Cli::try_parse_from(["api-endpoints", "rewrite"]).unwrap();
        match cli.command {
            Commands::Rewrite { root, dry_run } => {
                assert_eq!(root, PathBuf::from("src"));
                assert!(!dry_run);
            }
            _ => panic!("expected rewrite command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "api-endpoints",
            "show",
            "--api-base",
            "https://example.com/api",
            "-o",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.api_base.as_deref(), Some("https://example.com/api"));
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_output_format_rejected() {
        assert!(Cli::try_parse_from(["api-endpoints", "-o", "xml", "show"]).is_err());
    }
}
