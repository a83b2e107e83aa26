//! File-only tracing setup; the terminal belongs to ratatui.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured file so it never touches the screen.
///
/// `RUST_LOG` overrides the configured filter. Fails if the log file cannot be
/// created or a global subscriber is already installed.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
