//! Endpoint configuration for the frontend API client.
//!
//! This crate resolves the API base URL and the derived backend URL from the
//! environment, validates them, and rewrites frontend sources that still
//! hardcode local development URLs.

pub mod constants;
mod loader;
pub mod rewrite;
pub mod types;
pub mod validate;

pub use loader::{
    ConfigError, EndpointsLoader, default_mode, endpoints, env_var_or_none, log_endpoints, resolve,
};
pub use rewrite::{RewriteError, RewriteReport, rewrite_tree};
pub use types::{Endpoints, derive_backend_url};
pub use validate::{Finding, Severity, has_errors};
