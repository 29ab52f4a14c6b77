//! Whole-frame and whole-column operations used by the cleaning pipeline.
//!
//! Every function looks columns up through [`require_column`], so a missing
//! column surfaces as [`CleanError::MissingColumn`] rather than a generic
//! Polars error.

use polars::prelude::*;
use scorecard_ingest::any_to_string;

use crate::error::{CleanError, Result};

/// Look up a column by exact name.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| CleanError::MissingColumn {
        column: name.to_string(),
    })
}

/// Column names in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Stable ascending sort by the identifier columns.
///
/// Polars frames carry no index, so row positions are renumbered from zero
/// by construction. Missing identifier values sort last.
pub fn sort_by_identifiers(df: &DataFrame, identifiers: &[String]) -> Result<DataFrame> {
    if identifiers.is_empty() {
        return Err(CleanError::NoIdentifierColumns);
    }
    for name in identifiers {
        require_column(df, name)?;
    }
    let by: Vec<PlSmallStr> = identifiers
        .iter()
        .map(|name| PlSmallStr::from(name.as_str()))
        .collect();
    let options = SortMultipleOptions::default()
        .with_maintain_order(true)
        .with_nulls_last(true);
    Ok(df.sort(by, options)?)
}

/// Move `name` to position `index`, keeping the relative order of the rest.
///
/// An index past the end places the column last.
pub fn relocate_column(df: &DataFrame, name: &str, index: usize) -> Result<DataFrame> {
    require_column(df, name)?;
    let mut names = df.get_column_names_owned();
    let Some(position) = names.iter().position(|n| n.as_str() == name) else {
        return Err(CleanError::MissingColumn {
            column: name.to_string(),
        });
    };
    let moved = names.remove(position);
    let target = index.min(names.len());
    names.insert(target, moved);
    Ok(df.select(names)?)
}

/// Replace every `.` in a column name with `_`.
///
/// ```
/// use scorecard_transform::frame::normalize_name;
///
/// assert_eq!(normalize_name("PERFORM_CNS.SCORE.DESCRIPTION"), "PERFORM_CNS_SCORE_DESCRIPTION");
/// assert_eq!(normalize_name("ltv"), "ltv");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.replace('.', "_")
}

/// Normalize all column names in place. Returns the number renamed.
pub fn normalize_column_names(df: &mut DataFrame) -> Result<usize> {
    let mut renamed = 0;
    for name in column_names(df) {
        let normalized = normalize_name(&name);
        if normalized != name {
            df.rename(&name, normalized.into())?;
            renamed += 1;
        }
    }
    Ok(renamed)
}

/// Render every value of `column` as text, replacing missing with `""`.
///
/// Returns the number of missing values that were filled.
pub fn coerce_to_text(df: &mut DataFrame, column: &str) -> Result<usize> {
    let source = require_column(df, column)?;
    let filled = source.null_count();
    let mut values = Vec::with_capacity(source.len());
    for idx in 0..source.len() {
        values.push(any_to_string(source.get(idx)?));
    }
    df.with_column(Series::new(column.into(), values))?;
    Ok(filled)
}

/// Drop the named columns. Every column must exist.
pub fn drop_columns(df: &mut DataFrame, names: &[String]) -> Result<usize> {
    for name in names {
        require_column(df, name)?;
        df.drop_in_place(name)?;
    }
    Ok(names.len())
}

/// Cast the target to Int64 and check it only holds 0 and 1.
pub fn cast_binary_target(df: &mut DataFrame, column: &str) -> Result<()> {
    let source = require_column(df, column)?;
    let missing = source.null_count();
    if missing > 0 {
        return Err(CleanError::MissingTarget {
            column: column.to_string(),
            count: missing,
        });
    }
    let labels = source.strict_cast(&DataType::Int64)?;
    if let Some(value) = labels
        .i64()?
        .into_iter()
        .flatten()
        .find(|value| !matches!(value, 0 | 1))
    {
        return Err(CleanError::NonBinaryTarget {
            column: column.to_string(),
            value,
        });
    }
    df.with_column(labels)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loans() -> DataFrame {
        df! {
            "UniqueID" => [3i64, 1, 2],
            "ltv" => [80.5f64, 60.0, 70.25],
            "loan_default" => [1i64, 0, 0],
        }
        .unwrap()
    }

    #[test]
    fn sort_orders_rows_by_identifier() {
        let sorted = sort_by_identifiers(&loans(), &["UniqueID".to_string()]).unwrap();
        let ids: Vec<Option<i64>> = sorted.column("UniqueID").unwrap().i64().unwrap().into_iter().collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
        let ltv: Vec<Option<f64>> = sorted.column("ltv").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(ltv, vec![Some(60.0), Some(70.25), Some(80.5)]);
    }

    #[test]
    fn sort_requires_identifier() {
        assert!(matches!(
            sort_by_identifiers(&loans(), &[]),
            Err(CleanError::NoIdentifierColumns)
        ));
        assert!(matches!(
            sort_by_identifiers(&loans(), &["LoanID".to_string()]),
            Err(CleanError::MissingColumn { .. })
        ));
    }

    #[test]
    fn relocate_moves_target_to_second_position() {
        let moved = relocate_column(&loans(), "loan_default", 1).unwrap();
        assert_eq!(column_names(&moved), vec!["UniqueID", "loan_default", "ltv"]);
    }

    #[test]
    fn relocate_past_end_places_last() {
        let df = df! { "loan_default" => [0i64], "UniqueID" => [1i64] }.unwrap();
        let moved = relocate_column(&df, "loan_default", 5).unwrap();
        assert_eq!(column_names(&moved), vec!["UniqueID", "loan_default"]);
    }

    #[test]
    fn normalize_renames_dotted_columns_only() {
        let mut df = df! {
            "UniqueID" => [1i64],
            "Date.of.Birth" => ["01-01-84"],
        }
        .unwrap();
        assert_eq!(normalize_column_names(&mut df).unwrap(), 1);
        assert_eq!(column_names(&df), vec!["UniqueID", "Date_of_Birth"]);
        assert_eq!(normalize_column_names(&mut df).unwrap(), 0);
    }

    #[test]
    fn coerce_to_text_fills_missing() {
        let mut df = df! { "State_ID" => [Some(6i64), None, Some(13)] }.unwrap();
        assert_eq!(coerce_to_text(&mut df, "State_ID").unwrap(), 1);
        let column = df.column("State_ID").unwrap();
        assert_eq!(column.dtype(), &DataType::String);
        let values: Vec<Option<&str>> = column.str().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some("6"), Some(""), Some("13")]);
    }

    #[test]
    fn target_cast_rejects_non_binary() {
        let mut df = df! { "loan_default" => [0i64, 2] }.unwrap();
        assert!(matches!(
            cast_binary_target(&mut df, "loan_default"),
            Err(CleanError::NonBinaryTarget { value: 2, .. })
        ));
    }

    #[test]
    fn target_cast_from_text() {
        let mut df = df! { "loan_default" => ["0", "1"] }.unwrap();
        cast_binary_target(&mut df, "loan_default").unwrap();
        assert_eq!(df.column("loan_default").unwrap().dtype(), &DataType::Int64);
    }
}
