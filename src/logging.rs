//! Tracing setup for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. Diagnostics go to stderr so command output stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, checked before `RUST_LOG`
pub const LOG_ENV: &str = "SPENDWISE_LOG";

const DEFAULT_FILTER: &str = "spendwise=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = resolve_filter(
            std::env::var(LOG_ENV).ok(),
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        );

        // try_init: a host application may already own the global subscriber
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn resolve_filter(spendwise_log: Option<String>, rust_log: Option<String>) -> EnvFilter {
    spendwise_log
        .into_iter()
        .chain(rust_log)
        .filter(|directives| !directives.trim().is_empty())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
