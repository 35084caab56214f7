use tracing_subscriber::EnvFilter;

use crate::error::Error;

pub fn default_filter(level: &str) -> String {
    format!("{level},timed_values={level}")
}

/// Installs the global fmt subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
