use tracing_subscriber::EnvFilter;

use crate::config::MonitorConfig;

/// Install the global tracing subscriber using the configured filter.
///
/// Returns false if a subscriber was already installed; the existing one is kept.
pub fn init_logging(config: &MonitorConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
