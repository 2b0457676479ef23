//! Error types for index analytics.

use thiserror::Error;

/// Result type for index analytics.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors that can occur while computing index analytics.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// A column the computation needs is absent from the input frame
    #[error("Missing column '{column}' in input data")]
    MissingColumn {
        /// Name of the absent column
        column: String,
    },

    /// Invalid computation parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl IndexError {
    pub(crate) fn missing(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
        }
    }
}
