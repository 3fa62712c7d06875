//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Config file could not be parsed
    #[error("Invalid config file {}: {source}", path.display())]
    ConfigParse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser error
        source: serde_yaml_ng::Error,
    },

    /// A scripted key has no binding
    #[error("Unknown key '{key}' at position {position}")]
    UnknownKey {
        /// The token as given
        key: String,
        /// 1-based position in the key list
        position: usize,
    },

    /// Logging could not be initialised
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// Terminal setup or drawing failed
    #[error("Terminal error: {0}")]
    Terminal(std::io::Error),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(key: impl Into<String>, position: usize) -> Self {
        Self::UnknownKey {
            key: key.into(),
            position,
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
