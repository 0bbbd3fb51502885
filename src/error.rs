//! Error types for tempo.

use thiserror::Error;

/// Errors that can occur in tempo.
#[derive(Debug, Error)]
pub enum TempoError {
    /// Configuration problem: unreadable file, bad value, invalid key.
    #[error("configuration error: {0}")]
    Config(String),

    /// SQLite storage failure.
    #[error("database error: {0}")]
    Database(String),

    /// A referenced item does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid user input (bad duration, unknown filter, etc.).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization failure.
    #[error("failed to serialize output: {0}")]
    Parse(#[from] serde_json::Error),

    /// Terminal I/O failure while running the TUI.
    #[error("terminal error: {0}")]
    Terminal(String),
}
