//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file could not be read or parsed
    #[error("Failed to load {path}: {reason}")]
    Load {
        /// File being loaded
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Temporal analysis error
    #[error("Analysis error: {0}")]
    Temporal(#[from] ontext_temporal::TemporalError),

    /// Period matching or generation error
    #[error("Period error: {0}")]
    Period(#[from] ontext_periods::PeriodError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
