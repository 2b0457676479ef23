//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or caching auction data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Data parsing error
    #[error("Data parsing error: {0}")]
    Parse(String),

    /// A required column is absent from the source file
    #[error("Missing column '{column}' in {source_name}")]
    MissingColumn {
        /// Name of the absent column
        column: String,
        /// Name of the file or dataset that was loaded
        source_name: String,
    },

    /// Invalid year range
    #[error("Invalid year range: start {start} is after end {end}")]
    InvalidYearRange {
        /// First auction year of the range
        start: i32,
        /// Last auction year of the range
        end: i32,
    },

    /// No rows survived loading and cleanup
    #[error("No usable rows in {0}")]
    EmptyData(String),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(String),
}
