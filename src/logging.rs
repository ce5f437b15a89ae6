//! Tracing/logging initialization for the binary.
//!
//! Logs go to stderr so stdout carries only ledger output. The filter is read
//! from `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
