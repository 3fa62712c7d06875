//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise the level follows `-q`/`-v`.
//! Scripted runs log to stderr. The terminal UI owns the screen, so it
//! logs only to an explicit file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Builds the filter for a verbosity level, honouring `RUST_LOG`
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs a stderr subscriber
pub fn init_stderr(verbosity: Verbosity, ansi: bool) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Installs a subscriber appending to `path`
pub fn init_file(verbosity: Verbosity, path: &Path) -> CliResult<()> {
    let file = File::options().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
