//! Loan dataset ingestion utilities.
//!
//! This crate loads the raw loan-default CSV into a Polars DataFrame and
//! writes cleaned frames back out.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use scorecard_ingest::{IngestOptions, read_csv_table, write_csv_table};
//!
//! let mut df = read_csv_table(Path::new("train.csv"), &IngestOptions::default())?;
//! write_csv_table(&mut df, Path::new("train_clean.csv"))?;
//! ```

mod csv_io;
mod error;
mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading/Writing ===
pub use csv_io::{
    CsvHeaders, IngestOptions, MAX_CSV_FILE_SIZE, check_file_size, read_csv_schema,
    read_csv_table, validate_dataframe_shape, validate_encoding, write_csv_table,
};

// === AnyValue helpers ===
pub use polars_utils::{any_to_f64, any_to_string, format_numeric, parse_f64};
