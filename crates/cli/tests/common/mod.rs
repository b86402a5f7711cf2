//! Shared test utilities for api-endpoints integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Endpoint variables from the host environment never leak into tests.

use assert_cmd::Command;

/// Returns a hermetic `api-endpoints` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `VITE_API_BASE`, `APP_MODE`, and `RUST_LOG` are cleared.
pub fn endpoints_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("api-endpoints");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("VITE_API_BASE")
        .env_remove("APP_MODE")
        .env_remove("RUST_LOG");

    cmd
}
