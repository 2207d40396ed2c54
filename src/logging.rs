use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

static TRACING_INIT: Once = Once::new();

/// Route `tracing` output to an append-only log file. Stderr is left alone because
/// the terminal UI owns the screen.
pub(crate) fn init(log_path: &Path, filter: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });
    Ok(())
}
