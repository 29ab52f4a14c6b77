//! Column access shared by the category and histogram reports.

use polars::prelude::*;
use scorecard_ingest::{any_to_f64, any_to_string};

use crate::error::{ReportError, Result};

pub(crate) fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| ReportError::MissingColumn {
        column: name.to_string(),
    })
}

/// Per-row numeric values; missing and NaN become None.
pub(crate) fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = require_column(df, name)?;
    if matches!(column.dtype(), DataType::String) {
        return Err(ReportError::NotNumeric {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(any_to_f64(column.get(idx)?).filter(|v| !v.is_nan()));
    }
    Ok(values)
}

/// Per-row target labels; missing stays None, anything but 0/1 is an error.
pub(crate) fn binary_labels(df: &DataFrame, name: &str) -> Result<Vec<Option<bool>>> {
    let column = require_column(df, name)?;
    let mut labels = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let value = column.get(idx)?;
        if value.is_null() {
            labels.push(None);
            continue;
        }
        let label = match any_to_f64(value.clone()) {
            Some(v) if v == 0.0 => false,
            Some(v) if v == 1.0 => true,
            _ => {
                return Err(ReportError::NonBinaryTarget {
                    column: name.to_string(),
                    value: any_to_string(value),
                });
            }
        };
        labels.push(Some(label));
    }
    Ok(labels)
}

/// Per-row text values; missing stays None.
pub(crate) fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require_column(df, name)?;
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let value = column.get(idx)?;
        values.push((!value.is_null()).then(|| any_to_string(value)));
    }
    Ok(values)
}
