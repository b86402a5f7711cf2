//! Check command for endpoint validation.
//!
//! Responsibilities:
//! - Run `Endpoints::check` and print the findings.
//! - Fail with a validation exit code when any finding is an error.
//!
//! Does NOT handle:
//! - Network reachability of the endpoints.

use anyhow::Result;

use api_endpoints_config::{Endpoints, Severity, has_errors};

use crate::args::OutputFormat;
use crate::error::ValidationFailed;
use crate::formatters::format_findings;

pub fn run(endpoints: &Endpoints, output: OutputFormat) -> Result<()> {
    let findings = endpoints.check();
    println!("{}", format_findings(endpoints, &findings, output)?);

    if has_errors(&findings) {
        let errors = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        return Err(ValidationFailed { errors }.into());
    }
    Ok(())
}
