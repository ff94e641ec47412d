//! Logging configuration for evalview.
//!
//! Logs go to stderr so that stdout carries only the rendered records.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes logging to stderr.
///
/// The filter is read from `RUST_LOG` (e.g. `RUST_LOG=evalview=debug` shows
/// part counts and formatting fallbacks), defaulting to [`DEFAULT_FILTER`].
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
