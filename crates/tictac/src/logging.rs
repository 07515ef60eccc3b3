//! Tracing subscriber setup.

use crate::config::TictacConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Sends all tracing output to the configured log file.
///
/// Both front ends own the terminal, so nothing is ever written to stdout
/// or stderr. `RUST_LOG` overrides the configured filter. A subscriber that
/// is already installed is left in place.
pub fn init_logging(config: &TictacConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tracing::info!("Logging initialised");
    Ok(())
}
