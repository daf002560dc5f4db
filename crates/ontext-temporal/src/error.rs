//! Error types for temporal analysis

use thiserror::Error;

/// Errors that can occur during temporal analysis
///
/// Sparse data is never an error: missing years, empty corpora and periods
/// without documents all produce valid empty results. Only caller mistakes
/// surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// Caller passed an unusable argument (e.g. an empty search term)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
