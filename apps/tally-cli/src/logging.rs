//! Tracing setup for the CLI.
//!
//! Logs go to stderr so stdout stays clean for results (and `--json`).
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages for everything
//! - `RUST_LOG=tally_cli=trace` - Trace this crate only
//! - Default: warnings only, `-v` raises this crate to debug

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global subscriber. Call once, before any command runs.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "tally_cli=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
