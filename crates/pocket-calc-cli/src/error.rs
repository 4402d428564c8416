//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// A key in an eval sequence that no calculator key maps to
    #[error("Invalid key '{key}' in sequence (expected digits, '.', '+', '-', '*', '/', '=')")]
    InvalidKey {
        /// The offending character
        key: char,
    },

    /// Terminal setup or teardown failure
    #[error("Terminal error: {message}")]
    Terminal {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tape serialization error
    #[error("Tape export failed: {0}")]
    TapeExport(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid-key error
    #[must_use]
    pub fn invalid_key(key: char) -> Self {
        Self::InvalidKey { key }
    }

    /// Create a terminal error
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}
