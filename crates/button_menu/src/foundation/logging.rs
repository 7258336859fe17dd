//! Logging utilities
//!
//! Thin wrapper over the `log` facade; binaries embedding the menu layer
//! call [`init`] once at startup.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the environment (`RUST_LOG`)
///
/// # Panics
/// Panics if a logger was already installed; use [`try_init`] in tests.
pub fn init() {
    env_logger::Builder::from_default_env().init();
}

/// Initialize the logging system, ignoring an already-installed logger
pub fn try_init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
