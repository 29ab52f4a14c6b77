//! Error types for report generation.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("column '{column}' not found")]
    MissingColumn { column: String },

    #[error("column '{column}' has non-numeric type {dtype}")]
    NotNumeric { column: String, dtype: String },

    #[error("target column '{column}' has non-binary value '{value}'")]
    NonBinaryTarget { column: String, value: String },

    #[error("column '{column}' has no non-missing values")]
    NoValues { column: String },

    #[error("histogram needs at least one bin")]
    InvalidBins,

    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
