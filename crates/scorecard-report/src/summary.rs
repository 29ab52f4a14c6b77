//! Per-column dataset summary.

use std::collections::HashSet;

use polars::prelude::*;
use scorecard_ingest::any_to_string;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Shape of the frame plus one [`ColumnSummary`] per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: usize,
    pub column_summaries: Vec<ColumnSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub missing: usize,
    /// Missing count over rows, rounded to 2 decimals.
    pub missing_fraction: f64,
    /// Distinct non-missing values.
    pub unique: usize,
    /// Unique count over rows, rounded to 2 decimals.
    pub unique_fraction: f64,
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
    pub last: Option<String>,
}

impl DatasetSummary {
    /// Looks up a column summary by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.column_summaries.iter().find(|c| c.name == name)
    }
}

/// Summarize every column of `df`.
pub fn summarize(df: &DataFrame) -> Result<DatasetSummary> {
    let rows = df.height();
    let mut column_summaries = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        column_summaries.push(summarize_column(column, rows)?);
    }
    debug!(rows, columns = df.width(), "dataset summarized");
    Ok(DatasetSummary {
        rows,
        columns: df.width(),
        column_summaries,
    })
}

fn summarize_column(column: &Column, rows: usize) -> Result<ColumnSummary> {
    let missing = column.null_count();
    let mut distinct = HashSet::new();
    for idx in 0..column.len() {
        let value = column.get(idx)?;
        if !value.is_null() {
            distinct.insert(any_to_string(value));
        }
    }
    let unique = distinct.len();
    Ok(ColumnSummary {
        name: column.name().to_string(),
        dtype: column.dtype().to_string(),
        missing,
        missing_fraction: fraction(missing, rows),
        unique,
        unique_fraction: fraction(unique, rows),
        first: sample(column, 0)?,
        second: sample(column, 1)?,
        third: sample(column, 2)?,
        last: match rows {
            0 => None,
            n => sample(column, n - 1)?,
        },
    })
}

fn sample(column: &Column, idx: usize) -> Result<Option<String>> {
    if idx >= column.len() {
        return Ok(None);
    }
    let value = column.get(idx)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(any_to_string(value)))
}

/// `count / total` rounded to 2 decimals; 0 for an empty frame.
pub(crate) fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_round_to_two_decimals() {
        assert_eq!(fraction(1, 3), 0.33);
        assert_eq!(fraction(2, 3), 0.67);
        assert_eq!(fraction(0, 0), 0.0);
    }

    #[test]
    fn summary_counts_missing_and_unique() {
        let df = df! {
            "UniqueID" => [1i64, 2, 3, 4],
            "Employment_Type" => [Some("Salaried"), None, Some("Salaried"), Some("Self employed")],
        }
        .unwrap();
        let summary = summarize(&df).unwrap();
        assert_eq!((summary.rows, summary.columns), (4, 2));

        let employment = summary.column("Employment_Type").unwrap();
        assert_eq!(employment.missing, 1);
        assert_eq!(employment.missing_fraction, 0.25);
        assert_eq!(employment.unique, 2);
        assert_eq!(employment.unique_fraction, 0.5);
        assert_eq!(employment.first.as_deref(), Some("Salaried"));
        assert_eq!(employment.second, None);
        assert_eq!(employment.last.as_deref(), Some("Self employed"));
    }

    #[test]
    fn short_frames_leave_samples_empty() {
        let df = df! { "ltv" => [58.25f64] }.unwrap();
        let summary = summarize(&df).unwrap();
        let ltv = summary.column("ltv").unwrap();
        assert_eq!(ltv.first.as_deref(), Some("58.25"));
        assert_eq!(ltv.third, None);
        assert_eq!(ltv.last.as_deref(), Some("58.25"));
    }
}
