//! Output formatting for command results.
//!
//! Responsibilities:
//! - Render endpoints, findings, and rewrite reports as text or JSON.
//!
//! Does NOT handle:
//! - Writing to stdout (callers print the returned string).
//! - Logging (diagnostics go through `tracing` to stderr).

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

use api_endpoints_config::{Endpoints, Finding, RewriteReport, Severity};

use crate::args::OutputFormat;

/// Render resolved endpoints.
pub fn format_endpoints(endpoints: &Endpoints, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(endpoints)?),
        OutputFormat::Text => Ok(format!(
            "API_BASE_URL  {}\nBACKEND_URL   {}\nenvironment   {}",
            endpoints.api_base_url(),
            endpoints.backend_url(),
            endpoints.mode()
        )),
    }
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    #[serde(flatten)]
    endpoints: &'a Endpoints,
    findings: &'a [Finding],
}

/// Render validation findings together with the endpoints they refer to.
pub fn format_findings(
    endpoints: &Endpoints,
    findings: &[Finding],
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        let output = CheckOutput {
            endpoints,
            findings,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    if findings.is_empty() {
        return Ok(format!("OK  {}", endpoints.api_base_url()));
    }

    let mut out = String::new();
    for finding in findings {
        let label = match finding.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        writeln!(out, "{label}: {}", finding.message)?;
    }
    Ok(out.trim_end().to_string())
}

#[derive(Serialize)]
struct RewriteOutput<'a> {
    dry_run: bool,
    scanned: usize,
    fixed: &'a [PathBuf],
    failed: Vec<FailedFile<'a>>,
}

#[derive(Serialize)]
struct FailedFile<'a> {
    path: &'a PathBuf,
    error: &'a str,
}

/// Render a rewrite report.
pub fn format_rewrite_report(
    report: &RewriteReport,
    dry_run: bool,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        let output = RewriteOutput {
            dry_run,
            scanned: report.scanned,
            fixed: &report.fixed,
            failed: report
                .failed
                .iter()
                .map(|(path, error)| FailedFile { path, error })
                .collect(),
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let verb = if dry_run { "Would fix" } else { "Fixed" };
    let mut out = String::new();
    for path in &report.fixed {
        writeln!(out, "{verb}: {}", path.display())?;
    }
    for (path, error) in &report.failed {
        writeln!(out, "Failed: {} ({error})", path.display())?;
    }
    write!(
        out,
        "{verb} {} of {} files",
        report.fixed.len(),
        report.scanned
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_endpoints_text() {
        let endpoints = Endpoints::resolve(Some("https://example.com/api"), "production");
        let out = format_endpoints(&endpoints, OutputFormat::Text).unwrap();
        assert!(out.contains("API_BASE_URL  https://example.com/api"));
        assert!(out.contains("BACKEND_URL   https://example.com"));
        assert!(out.contains("environment   production"));
    }

    #[test]
    fn test_format_endpoints_json() {
        let endpoints = Endpoints::resolve(None, "development");
        let out = format_endpoints(&endpoints, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["backend_url"], "https://backend-xfp1.vercel.app");
        assert_eq!(value["environment"], "development");
    }

    #[test]
    fn test_format_findings_text() {
        let endpoints = Endpoints::resolve(Some("ftp://example.com/v2"), "development");
        let findings = endpoints.check();
        let out = format_findings(&endpoints, &findings, OutputFormat::Text).unwrap();
        assert!(out.contains("warning: "));
        assert!(out.contains("error: "));
    }

    #[test]
    fn test_format_findings_json_includes_endpoints() {
        let endpoints = Endpoints::resolve(None, "production");
        let out = format_findings(&endpoints, &[], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["api_base_url"], "https://backend-xfp1.vercel.app/api");
        assert_eq!(value["findings"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_format_rewrite_report_text() {
        let report = RewriteReport {
            fixed: vec![PathBuf::from("src/App.jsx")],
            failed: vec![(PathBuf::from("src/x.js"), "denied".to_string())],
            scanned: 4,
        };
        let out = format_rewrite_report(&report, true, OutputFormat::Text).unwrap();
        assert!(out.contains("Would fix: src/App.jsx"));
        assert!(out.contains("Failed: src/x.js (denied)"));
        assert!(out.ends_with("Would fix 1 of 4 files"));
    }
}
