//! Rewrite command: migrate hardcoded localhost URLs to the endpoint config exports.

use anyhow::{Context, Result};
use std::path::Path;

use api_endpoints_config::rewrite_tree;

use crate::args::OutputFormat;
use crate::formatters::format_rewrite_report;

pub fn run(root: &Path, dry_run: bool, output: OutputFormat) -> Result<()> {
    let report = rewrite_tree(root, dry_run)
        .with_context(|| format!("Failed to rewrite sources under {}", root.display()))?;

    tracing::info!(
        fixed = report.fixed.len(),
        failed = report.failed.len(),
        scanned = report.scanned,
        dry_run,
        "rewrite finished"
    );
    println!("{}", format_rewrite_report(&report, dry_run, output)?);
    Ok(())
}
