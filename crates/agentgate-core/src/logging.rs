//! Logging init: append to a log file (XDG state dir by default), or fall back to stderr.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::{MakeWriterExt, OptionalWriter};
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,agentgate=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Default log file: `~/.local/state/agentgate/agentgate.log`.
pub fn default_log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("agentgate")?;
    Ok(xdg_dirs.place_state_file("agentgate.log")?)
}

/// Installs the global subscriber writing to `path` (or the default log file).
///
/// Returns the file in use. On failure (unwritable directory, subscriber
/// already installed) returns Err so the caller can fall back to stderr.
pub fn init_logging(path: Option<&Path>) -> Result<PathBuf> {
    let log_file_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_log_path()?,
    };
    if let Some(dir) = log_file_path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("open {}", log_file_path.display()))?;

    // Each event writes through its own handle; stderr takes over if cloning fails.
    let file_writer = move || -> OptionalWriter<fs::File> { file.try_clone().ok().into() };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(file_writer.or_else(io::stderr))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("agentgate logging initialized at {}", log_file_path.display());
    Ok(log_file_path)
}

/// Logs to stderr only. Use when [`init_logging`] fails so the CLI keeps working.
pub fn init_logging_stderr() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("subscriber already installed; keeping it");
    }
}
