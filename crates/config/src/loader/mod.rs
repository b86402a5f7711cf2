//! Endpoint loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load `.env` files and environment variables into an `EndpointsLoader`.
//! - Resolve the process-scoped `Endpoints` once and emit the diagnostic record.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Validation of resolved URLs (see `validate.rs`).
//! - Rewriting frontend sources (see `rewrite.rs`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - Resolution never fails; an absent or empty override falls back to the default.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{EndpointsLoader, default_mode, endpoints, log_endpoints, resolve};
pub use env::env_var_or_none;
pub use error::ConfigError;
