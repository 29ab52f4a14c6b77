//! Configuration options for the cleaning pipeline.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::columns;
use crate::error::{OptionsError, Result};

/// A duration-string column and the month-count column derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationColumn {
    /// Source column holding values such as `"2yrs 3mon"`.
    pub source: String,
    /// Derived Int64 column holding the total number of months.
    pub target: String,
}

impl DurationColumn {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Options controlling the cleaning pipeline.
///
/// `Default` reproduces the column catalogue of the vehicle-loan dataset and
/// the January 2019 reference date the dataset was published with. All
/// column names are in normalized form (no `.`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Date treated as "now" for age and recency derivations.
    ///
    /// Also bounds the two-digit-year heuristic: birth years after this
    /// date's year are assumed to be a century rollover and moved back 100
    /// years.
    pub reference_date: NaiveDate,

    /// Column holding the bureau score description.
    pub description_column: String,

    /// Description value marking records without bureau history.
    pub no_bureau_sentinel: String,

    /// Column holding the bureau credit score.
    pub score_column: String,

    /// Scores strictly below this value are set to missing.
    pub min_credit_score: f64,

    /// Columns coerced to text with missing replaced by `""`.
    pub categorical_columns: Vec<String>,

    /// Columns set to missing for records without bureau history.
    pub bureau_columns: Vec<String>,

    /// Birth date column (`dd-mm-yy`).
    pub birth_date_column: String,

    /// Disbursal date column (`dd-mm-yy`).
    pub disbursal_date_column: String,

    /// Derived age column.
    pub age_column: String,

    /// Derived days-since-disbursement column.
    pub recency_column: String,

    /// Duration strings converted to month counts.
    pub duration_columns: Vec<DurationColumn>,

    /// Columns with a single constant value, dropped after derivation.
    pub constant_columns: Vec<String>,

    /// Sparse or high-cardinality columns dropped last.
    pub sparse_columns: Vec<String>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            description_column: columns::SCORE_DESCRIPTION.to_string(),
            no_bureau_sentinel: columns::NO_BUREAU_HISTORY.to_string(),
            score_column: columns::CREDIT_SCORE.to_string(),
            min_credit_score: columns::MIN_CREDIT_SCORE,
            categorical_columns: to_owned(&columns::CATEGORICAL_COLUMNS),
            bureau_columns: to_owned(&columns::BUREAU_COLUMNS),
            birth_date_column: columns::DATE_OF_BIRTH.to_string(),
            disbursal_date_column: columns::DISBURSAL_DATE.to_string(),
            age_column: columns::AGE_IN_YEARS.to_string(),
            recency_column: columns::DAYS_SINCE_DISBURSEMENT.to_string(),
            duration_columns: vec![
                DurationColumn::new(columns::AVERAGE_ACCT_AGE, columns::ACCT_AGE_IN_MONTHS),
                DurationColumn::new(
                    columns::CREDIT_HISTORY_LENGTH,
                    columns::CREDIT_HIST_LEN_IN_MONTHS,
                ),
            ],
            constant_columns: to_owned(&columns::CONSTANT_COLUMNS),
            sparse_columns: to_owned(&columns::SPARSE_COLUMNS),
        }
    }
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference date.
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// Load options from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| OptionsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| OptionsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Raw input columns removed once their derived columns exist, in drop order.
    ///
    /// Sparse columns come last; see [`CleanOptions::sparse_columns`].
    pub fn superseded_columns(&self) -> Vec<String> {
        let mut dropped = vec![self.birth_date_column.clone()];
        dropped.extend(self.duration_columns.iter().map(|d| d.source.clone()));
        dropped.extend(self.constant_columns.iter().cloned());
        dropped.push(self.disbursal_date_column.clone());
        dropped
    }
}

/// January 2019, when the dataset was created.
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or_default()
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reference_date_is_january_2019() {
        let options = CleanOptions::default();
        assert_eq!(
            options.reference_date,
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()
        );
    }

    #[test]
    fn superseded_columns_follow_drop_order() {
        let options = CleanOptions::default();
        assert_eq!(
            options.superseded_columns(),
            vec![
                "Date_of_Birth",
                "AVERAGE_ACCT_AGE",
                "CREDIT_HISTORY_LENGTH",
                "MobileNo_Avl_Flag",
                "DisbursalDate",
            ]
        );
    }

    #[test]
    fn eight_bureau_columns_by_default() {
        assert_eq!(CleanOptions::default().bureau_columns.len(), 8);
    }
}
