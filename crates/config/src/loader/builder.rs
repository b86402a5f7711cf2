//! Endpoint loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EndpointsLoader` merging builder values, env vars, and defaults.
//! - Build the final `Endpoints` and log the diagnostic record.
//! - Hold the process-scoped `Endpoints` resolved on first access.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - URL validation (see validate.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `build()` is infallible.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::sync::LazyLock;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEVELOPMENT_MODE, DOTENV_DISABLED_ENV, PRODUCTION_MODE};
use crate::types::Endpoints;

static ENDPOINTS: LazyLock<Endpoints> = LazyLock::new(resolve);

/// Loader that builds `Endpoints` from builder values and environment variables.
#[derive(Debug, Default)]
pub struct EndpointsLoader {
    api_base_url: Option<String>,
    mode: Option<String>,
}

impl EndpointsLoader {
    /// Create a new loader with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_ENV).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file in the working directory if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("dotenv loading disabled via {}", DOTENV_DISABLED_ENV);
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the API base URL explicitly. An empty value still falls back to the default.
    pub fn with_api_base_url(mut self, url: String) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Set the mode label explicitly.
    pub fn with_mode(mut self, mode: String) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Fill unset values from `VITE_API_BASE` and `APP_MODE`.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    pub(crate) fn set_api_base_url(&mut self, url: Option<String>) {
        self.api_base_url = url;
    }

    pub(crate) fn set_mode(&mut self, mode: Option<String>) {
        self.mode = mode;
    }

    /// Build the endpoints, applying the default URL and mode where unset or empty.
    pub fn build(self) -> Endpoints {
        let mode = self
            .mode
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default_mode().to_string());
        Endpoints::resolve(self.api_base_url.as_deref(), mode)
    }
}

/// Mode label for the current build when `APP_MODE` is not set.
pub fn default_mode() -> &'static str {
    if cfg!(debug_assertions) {
        DEVELOPMENT_MODE
    } else {
        PRODUCTION_MODE
    }
}

/// Resolve endpoints from the current process environment and log them.
///
/// Does not load `.env`; call `EndpointsLoader::load_dotenv` first if needed.
pub fn resolve() -> Endpoints {
    let endpoints = EndpointsLoader::new().from_env().build();
    log_endpoints(&endpoints);
    endpoints
}

/// Process-scoped endpoints, resolved (and logged) on first access.
pub fn endpoints() -> &'static Endpoints {
    &ENDPOINTS
}

/// Emit the diagnostic record for resolved endpoints.
pub fn log_endpoints(endpoints: &Endpoints) {
    tracing::info!(
        api_base_url = %endpoints.api_base_url(),
        backend_url = %endpoints.backend_url(),
        environment = %endpoints.mode(),
        "API configuration"
    );
}
