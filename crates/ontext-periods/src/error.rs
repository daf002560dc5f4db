//! Error types for period matching and generation

use thiserror::Error;

/// Errors that can occur when building or matching periods
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// Period range cannot be generated
    #[error("Invalid period range: {0}")]
    InvalidRange(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
