//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map library errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use api_endpoints_config::RewriteError;
use thiserror::Error;

/// Structured exit codes for api-endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Not found - the rewrite source root does not exist.
    NotFound = 4,

    /// Validation error - `check` reported at least one error finding.
    ///
    /// Scripts should fix the configuration and not retry as-is.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Error returned by `check` when validation found errors.
///
/// Findings are already printed; this only carries the exit code.
#[derive(Error, Debug)]
#[error("endpoint validation failed with {errors} error(s)")]
pub struct ValidationFailed {
    pub errors: usize,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError for unrecognized errors.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<ValidationFailed>().is_some() {
                return ExitCode::ValidationError;
            }
            if let Some(RewriteError::RootNotFound(_)) = cause.downcast_ref::<RewriteError>() {
                return ExitCode::NotFound;
            }
        }
        ExitCode::GeneralError
    }
}
