//! Shared plumbing for the kitbag utilities: logging, configuration and
//! error types.

pub mod config;
pub mod error;

pub use config::{Config, Units, ValidationResult, WeatherConfig};
pub use error::{ConfigError, NetworkError, ReqwestErrorExt};

use anyhow::Result;

/// Initialize tracing/logging.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (normally the
/// configured `log_level`) is used. Output goes to stderr so that it never
/// interleaves with the interactive menus on stdout.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("kitbag logging initialized");
    Ok(())
}
