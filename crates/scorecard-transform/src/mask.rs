//! Boolean row masks and mask-driven assignment.
//!
//! Conditional overwrites are expressed as two separate operations: build a
//! mask over the rows, then assign under it. Masks never contain nulls; a
//! missing input value yields `false`.

use polars::prelude::*;

use crate::error::Result;
use crate::frame::require_column;

/// Rows where `column` (rendered as text) equals `value`.
pub fn equals_mask(df: &DataFrame, column: &str, value: &str) -> Result<BooleanChunked> {
    let text = require_column(df, column)?.cast(&DataType::String)?;
    let mask: BooleanChunked = text
        .str()?
        .into_iter()
        .map(|cell| Some(cell == Some(value)))
        .collect();
    Ok(mask.with_name(column.into()))
}

/// Rows where numeric `column` is strictly below `threshold`.
pub fn below_mask(df: &DataFrame, column: &str, threshold: f64) -> Result<BooleanChunked> {
    let numeric = require_column(df, column)?.cast(&DataType::Float64)?;
    let mask: BooleanChunked = numeric
        .f64()?
        .into_iter()
        .map(|cell| Some(cell.is_some_and(|v| v < threshold)))
        .collect();
    Ok(mask.with_name(column.into()))
}

/// Number of rows selected by the mask.
pub fn selected_count(mask: &BooleanChunked) -> usize {
    mask.into_iter().filter(|selected| *selected == Some(true)).count()
}

/// Returns `column` with every masked row set to null. The dtype is kept.
pub fn null_where(column: &Column, mask: &BooleanChunked) -> Result<Column> {
    let series = column.as_materialized_series();
    let nulls = Series::full_null(series.name().clone(), series.len(), series.dtype());
    let keep = !mask;
    Ok(series.zip_with(&keep, &nulls)?.into_column())
}

/// Returns `column` as text with every masked row replaced by `value`.
pub fn fill_where(column: &Column, mask: &BooleanChunked, value: &str) -> Result<Column> {
    let text = column.cast(&DataType::String)?;
    let filled: StringChunked = text
        .str()?
        .into_iter()
        .zip(mask.into_iter())
        .map(|(cell, selected)| {
            if selected == Some(true) {
                Some(value)
            } else {
                cell
            }
        })
        .collect();
    Ok(filled.with_name(column.name().clone()).into_column())
}

/// Sets every masked row of each named column to null in place.
pub fn null_columns_where(
    df: &mut DataFrame,
    columns: &[String],
    mask: &BooleanChunked,
) -> Result<()> {
    for name in columns {
        let updated = null_where(require_column(df, name)?, mask)?;
        df.with_column(updated)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df! {
            "desc" => [Some("A-Very Low Risk"), Some("No Bureau History Available"), None],
            "score" => [Some(738i64), Some(0), None],
        }
        .unwrap()
    }

    #[test]
    fn equals_mask_treats_missing_as_false() {
        let mask = equals_mask(&frame(), "desc", "No Bureau History Available").unwrap();
        let values: Vec<Option<bool>> = mask.into_iter().collect();
        assert_eq!(values, vec![Some(false), Some(true), Some(false)]);
    }

    #[test]
    fn below_mask_ignores_missing_scores() {
        let mask = below_mask(&frame(), "score", 20.0).unwrap();
        assert_eq!(selected_count(&mask), 1);
        let values: Vec<Option<bool>> = mask.into_iter().collect();
        assert_eq!(values, vec![Some(false), Some(true), Some(false)]);
    }

    #[test]
    fn null_where_keeps_dtype() {
        let df = frame();
        let mask = below_mask(&df, "score", 20.0).unwrap();
        let column = null_where(df.column("score").unwrap(), &mask).unwrap();
        assert_eq!(column.dtype(), &DataType::Int64);
        let values: Vec<Option<i64>> = column.i64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(738), None, None]);
    }

    #[test]
    fn fill_where_replaces_only_masked_rows() {
        let df = frame();
        let mask = equals_mask(&df, "desc", "No Bureau History Available").unwrap();
        let column = fill_where(df.column("desc").unwrap(), &mask, "").unwrap();
        let values: Vec<Option<&str>> = column.str().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some("A-Very Low Risk"), Some(""), None]);
    }
}
