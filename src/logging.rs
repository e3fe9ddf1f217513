//! Diagnostic logging.
//!
//! Diagnostics go to stderr through `tracing`; stdout carries progress lines
//! and dry-run output only. The filter is read from `ENTRYPOINT_LOG`
//! (`EnvFilter` syntax, e.g. `debug`), defaulting to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ENTRYPOINT_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
