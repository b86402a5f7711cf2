//! api-endpoints - resolve and apply the frontend API endpoint configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve endpoints once and emit the diagnostic record.
//! - Dispatch to `show`, `check`, or `rewrite`.
//!
//! Does NOT handle:
//! - Resolution or validation rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Logs go to stderr; command results go to stdout.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use api_endpoints_config::{EndpointsLoader, log_endpoints};
use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = EndpointsLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_logging(cli.log_format);

    let mut loader = EndpointsLoader::new();
    if let Some(ref url) = cli.api_base {
        loader = loader.with_api_base_url(url.clone());
    }
    if let Some(ref mode) = cli.mode {
        loader = loader.with_mode(mode.clone());
    }
    let endpoints = loader.from_env().build();
    log_endpoints(&endpoints);

    let exit_code = match run_command(cli, &endpoints) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Install the global subscriber. Defaults to `info` when `RUST_LOG` is unset.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (text_layer, json_layer) = match format {
        LogFormat::Text => (
            Some(
                fmt::layer()
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogFormat::Json => (None, Some(fmt::layer().json().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .init();
}
