//! Tests for the endpoint loader.
//!
//! Responsibilities:
//! - Test builder precedence and defaults.
//! - Test environment variable handling for the override and mode.
//! - Test `.env` loading, including the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests that change the working directory also hold `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
