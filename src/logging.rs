//! Tracing subscriber setup for the binary.
//!
//! The terminal UI owns the screen, so logs only reach a terminal stream in
//! non-interactive mode. With a log file, everything goes to the file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset and a log file is given
const FILE_DEFAULT_FILTER: &str = "convertr=info";
/// Filter used when `RUST_LOG` is unset and logs go to stderr
const STDERR_DEFAULT_FILTER: &str = "convertr=warn";

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick a target: an explicit file wins, otherwise stderr unless the
    /// terminal UI is about to take over the screen
    pub fn select(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, false) => LogTarget::Stderr,
            (None, true) => LogTarget::Disabled,
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(FILE_DEFAULT_FILTER))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(STDERR_DEFAULT_FILTER))
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;
        }
        LogTarget::Disabled => {}
    }
    Ok(())
}
