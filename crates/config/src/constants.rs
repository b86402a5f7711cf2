//! Centralized constants for endpoint resolution.
//!
//! This module contains the literal defaults and environment variable names
//! shared by the loader, the validator, and the CLI.

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// API base URL used when no override is provided.
pub const DEFAULT_API_BASE_URL: &str = "https://backend-xfp1.vercel.app/api";

/// Path segment stripped (first occurrence) from the API base URL to obtain the backend URL.
pub const API_PATH_SEGMENT: &str = "/api";

/// Mode label reported for debug builds when `APP_MODE` is unset.
pub const DEVELOPMENT_MODE: &str = "development";

/// Mode label reported for release builds when `APP_MODE` is unset.
pub const PRODUCTION_MODE: &str = "production";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "VITE_API_BASE";

/// Environment variable overriding the mode label.
pub const MODE_ENV: &str = "APP_MODE";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_ENV: &str = "DOTENV_DISABLED";

// =============================================================================
// Rewrite Defaults
// =============================================================================

/// Module specifier (relative to the source root) that exports both endpoint roots.
pub const API_CONFIG_MODULE: &str = "config/apiConfig";

/// Name under which the config module exports the API base URL.
pub const API_BASE_URL_IDENT: &str = "API_BASE_URL";

/// Name under which the config module exports the backend URL.
pub const BACKEND_URL_IDENT: &str = "BACKEND_URL";

/// Default directory scanned by the rewriter.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// File extensions scanned by the rewriter, in processing order.
pub const REWRITE_EXTENSIONS: &[&str] = &["jsx", "js"];
