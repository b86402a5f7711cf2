//! Non-fatal checks over resolved endpoints.
//!
//! Responsibilities:
//! - Parse the API base URL and report problems as `Finding`s.
//!
//! Does NOT handle:
//! - Changing resolved values. Resolution always succeeds; findings are advisory.
//! - Network reachability.

use serde::Serialize;
use url::{Host, Url};

use crate::constants::{API_PATH_SEGMENT, PRODUCTION_MODE};
use crate::types::Endpoints;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single validation observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl Endpoints {
    /// Check the resolved endpoints, returning findings in the order the checks run.
    pub fn check(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        let api = self.api_base_url();

        if !api.contains(API_PATH_SEGMENT) {
            findings.push(Finding::warning(format!(
                "API base URL does not contain '{API_PATH_SEGMENT}'; backend URL equals API base URL"
            )));
        }

        let url = match Url::parse(api) {
            Ok(url) => url,
            Err(e) => {
                findings.push(Finding::error(format!(
                    "API base URL is not an absolute URL: {e}"
                )));
                return findings;
            }
        };

        if api.contains(API_PATH_SEGMENT) {
            let backend_host = Url::parse(self.backend_url())
                .ok()
                .and_then(|b| b.host_str().map(str::to_owned));
            if backend_host.as_deref() != url.host_str() {
                findings.push(Finding::warning(format!(
                    "first '{API_PATH_SEGMENT}' occurs before the path; backend URL '{}' has a different host",
                    self.backend_url()
                )));
            }
        }

        match url.scheme() {
            "https" => {}
            "http" => {
                if !is_loopback(&url) {
                    findings.push(Finding::warning(format!(
                        "API base URL uses plain http for non-local host '{}'",
                        url.host_str().unwrap_or_default()
                    )));
                }
            }
            other => {
                findings.push(Finding::error(format!(
                    "API base URL scheme '{other}' is not http or https"
                )));
            }
        }

        if is_loopback(&url) && self.mode() == PRODUCTION_MODE {
            findings.push(Finding::warning(
                "API base URL points at a loopback host while mode is production",
            ));
        }

        for finding in &findings {
            tracing::debug!(severity = ?finding.severity, "{}", finding.message);
        }
        findings
    }
}

/// Returns true if any finding is an error.
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(addr)) => addr.is_loopback(),
        Some(Host::Ipv6(addr)) => addr.is_loopback(),
        None => false,
    }
}
