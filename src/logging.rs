//! Logging setup.

use crate::config::GameConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install a `tracing` fmt subscriber.
///
/// `RUST_LOG` wins over the configured filter. Returns `false` when a
/// global subscriber was already installed, which is harmless.
pub fn init_logging(config: &GameConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        debug!(filter = %config.log_filter, "Logging initialized");
    }
    installed
}
