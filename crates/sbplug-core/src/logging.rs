//! Logging init: stderr only, so stdout carries just the confirmation line.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initialize structured logging to stderr. `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    tracing::debug!(
        "platform: {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}
