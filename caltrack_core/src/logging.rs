//! Logging infrastructure for Caltrack.
//!
//! Reports and session output are written to stdout by the CLI, so all
//! tracing output is sent to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber, writing compact lines to stderr
///
/// `default_level` (e.g. "warn" for normal runs, "debug" with `--verbose`)
/// applies only when RUST_LOG is unset or unparseable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route debug-level output through the test harness; safe to call repeatedly
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
