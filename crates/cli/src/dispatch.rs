//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Endpoint resolution (see `main()`).

use anyhow::Result;

use api_endpoints_config::Endpoints;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, endpoints: &Endpoints) -> Result<()> {
    match cli.command {
        Commands::Show => commands::show::run(endpoints, cli.output),
        Commands::Check => commands::check::run(endpoints, cli.output),
        Commands::Rewrite { root, dry_run } => commands::rewrite::run(&root, dry_run, cli.output),
    }
}
