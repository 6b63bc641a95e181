//! Tracing subscriber setup for embedders.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install a global `tracing` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` when set, else from the configured
/// level. Safe to call more than once; only the first call installs.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
