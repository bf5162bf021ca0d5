//! Diagnostic logging.
//!
//! Logs go to stderr so a demo's stdout transcript stays byte-for-byte
//! deterministic. Rejected business operations are logged at `warn`, which is
//! also the default filter; `RUST_LOG=oop_concepts=debug` shows every step.

use std::io;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
