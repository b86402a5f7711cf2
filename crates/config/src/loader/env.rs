//! Environment variable parsing for endpoint resolution.
//!
//! Responsibilities:
//! - Read the override and mode variables and apply them to an `EndpointsLoader`.
//! - Provide a helper for reading env vars with empty-value filtering.
//!
//! Does NOT handle:
//! - Building the final `Endpoints` (see builder.rs).
//! - .env file loading (handled by `EndpointsLoader::load_dotenv`).
//!
//! Invariants:
//! - Unset, empty, and non-unicode environment variables are treated as unset.
//! - Present values are returned verbatim; surrounding whitespace is kept.
//! - Values already set on the loader are not replaced.

use super::builder::EndpointsLoader;
use crate::constants::{API_BASE_ENV, MODE_ENV};

/// Read an environment variable, returning None if unset, empty, or not valid unicode.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Apply environment variable configuration to the loader.
///
/// Explicit builder values win over the environment.
pub fn apply_env(loader: &mut EndpointsLoader) {
    if loader.api_base_url().is_none()
        && let Some(url) = env_var_or_none(API_BASE_ENV)
    {
        loader.set_api_base_url(Some(url));
    }
    if loader.mode().is_none()
        && let Some(mode) = env_var_or_none(MODE_ENV)
    {
        loader.set_mode(Some(mode));
    }
}
