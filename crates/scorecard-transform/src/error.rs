//! Error types for the cleaning pipeline.

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::duration::DurationError;

/// Errors that abort the cleaning pipeline.
///
/// The pipeline never returns a partially cleaned frame: the first failing
/// step ends the run.
#[derive(Debug, Error)]
pub enum CleanError {
    /// A column the pipeline relies on is absent from the frame.
    #[error("column '{column}' not found")]
    MissingColumn { column: String },

    /// No identifier columns were supplied for the canonical ordering.
    #[error("at least one identifier column is required")]
    NoIdentifierColumns,

    /// A duration string does not follow the `<n>yrs <m>mon` pattern.
    #[error("invalid duration '{value}' in column '{column}' at row {row}: {source}")]
    InvalidDuration {
        column: String,
        row: usize,
        value: String,
        #[source]
        source: DurationError,
    },

    /// The target holds missing values and cannot become an integer label.
    #[error("target column '{column}' has {count} missing values")]
    MissingTarget { column: String, count: usize },

    /// The target holds a value other than 0 or 1.
    #[error("target column '{column}' has non-binary value {value}")]
    NonBinaryTarget { column: String, value: i64 },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] PolarsError),
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
