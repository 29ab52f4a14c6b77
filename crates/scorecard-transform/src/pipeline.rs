//! The ordered cleaning pipeline.
//!
//! Steps run in the fixed order of [`CleanStep::ALL`]; each step's output is
//! the next step's input, and the first failure aborts the run.
//!
//! # Example
//!
//! ```ignore
//! use scorecard_model::CleanOptions;
//! use scorecard_transform::CleanPipeline;
//!
//! let pipeline = CleanPipeline::new(vec!["UniqueID".into()], "loan_default", CleanOptions::default());
//! let (cleaned, report) = pipeline.run(raw)?;
//! ```

use std::time::Instant;

use polars::prelude::*;
use scorecard_model::CleanOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::datetime::{birth_date_to_age, days_between, parse_short_date};
use crate::duration::{DurationError, parse_duration_months};
use crate::error::{CleanError, Result};
use crate::frame::{
    cast_binary_target, coerce_to_text, drop_columns, normalize_column_names, normalize_name,
    relocate_column, require_column, sort_by_identifiers,
};
use crate::mask::{below_mask, equals_mask, fill_where, null_columns_where, null_where, selected_count};

/// Position of the target column in the cleaned frame.
pub const TARGET_POSITION: usize = 1;

/// One step of the cleaning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CleanStep {
    /// Stable ascending sort by the identifier columns.
    SortByIdentifiers,
    /// Move the target to the second column.
    RelocateTarget,
    /// Replace `.` with `_` in column names.
    NormalizeNames,
    /// Render code and flag columns as text, missing as `""`.
    CoerceCategoricals,
    /// Blank bureau columns for records without bureau history.
    SparsifyBureau,
    /// Null out "not scored" credit-score codes.
    SanitizeCreditScore,
    /// Birth date to age in whole years.
    DeriveAge,
    /// Disbursal date to days elapsed.
    DeriveRecency,
    /// Duration strings to month counts.
    ParseDurations,
    /// Drop superseded, constant and sparse columns.
    DropColumns,
    /// Cast the target to a 0/1 integer.
    FinalizeTarget,
}

impl CleanStep {
    /// All steps in execution order.
    pub const ALL: [CleanStep; 11] = [
        Self::SortByIdentifiers,
        Self::RelocateTarget,
        Self::NormalizeNames,
        Self::CoerceCategoricals,
        Self::SparsifyBureau,
        Self::SanitizeCreditScore,
        Self::DeriveAge,
        Self::DeriveRecency,
        Self::ParseDurations,
        Self::DropColumns,
        Self::FinalizeTarget,
    ];

    /// Returns a human-readable name for the step.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SortByIdentifiers => "Sort by identifiers",
            Self::RelocateTarget => "Relocate target",
            Self::NormalizeNames => "Normalize names",
            Self::CoerceCategoricals => "Coerce categoricals",
            Self::SparsifyBureau => "Sparsify bureau data",
            Self::SanitizeCreditScore => "Sanitize credit score",
            Self::DeriveAge => "Derive age",
            Self::DeriveRecency => "Derive recency",
            Self::ParseDurations => "Parse durations",
            Self::DropColumns => "Drop columns",
            Self::FinalizeTarget => "Finalize target",
        }
    }

    /// What the step's count measures.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::RelocateTarget | Self::NormalizeNames | Self::DropColumns => "columns",
            Self::CoerceCategoricals | Self::ParseDurations => "values",
            Self::SortByIdentifiers
            | Self::SparsifyBureau
            | Self::SanitizeCreditScore
            | Self::DeriveAge
            | Self::DeriveRecency
            | Self::FinalizeTarget => "rows",
        }
    }
}

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub step: CleanStep,
    /// Rows, columns or values affected; see [`CleanStep::unit`].
    pub count: usize,
}

/// Per-step summary of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    pub input_rows: usize,
    pub input_columns: usize,
    pub output_columns: usize,
    pub steps: Vec<StepReport>,
}

impl CleanReport {
    /// Count recorded for `step`, if it ran.
    pub fn count(&self, step: CleanStep) -> Option<usize> {
        self.steps
            .iter()
            .find(|report| report.step == step)
            .map(|report| report.count)
    }
}

/// The cleaning pipeline bound to its identifier and target columns.
#[derive(Debug, Clone)]
pub struct CleanPipeline {
    identifier_columns: Vec<String>,
    target_column: String,
    options: CleanOptions,
}

impl CleanPipeline {
    /// Identifier and target names are given as they appear in the raw frame.
    pub fn new(
        identifier_columns: Vec<String>,
        target_column: impl Into<String>,
        options: CleanOptions,
    ) -> Self {
        Self {
            identifier_columns,
            target_column: target_column.into(),
            options,
        }
    }

    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Target column name once column names are normalized.
    pub fn output_target(&self) -> String {
        normalize_name(&self.target_column)
    }

    /// Run every step in order.
    ///
    /// # Errors
    ///
    /// Returns the first step failure; no partially cleaned frame is returned.
    pub fn run(&self, mut df: DataFrame) -> Result<(DataFrame, CleanReport)> {
        let span = info_span!(
            "clean",
            target = %self.target_column,
            rows = df.height(),
            columns = df.width()
        );
        let _guard = span.enter();

        let mut report = CleanReport {
            input_rows: df.height(),
            input_columns: df.width(),
            ..CleanReport::default()
        };
        for step in CleanStep::ALL {
            let start = Instant::now();
            let count = info_span!("step", step = step.display_name())
                .in_scope(|| self.apply(step, &mut df))?;
            info!(
                step = step.display_name(),
                count,
                unit = step.unit(),
                duration_ms = start.elapsed().as_millis(),
                "step complete"
            );
            report.steps.push(StepReport { step, count });
        }
        report.output_columns = df.width();
        Ok((df, report))
    }

    fn apply(&self, step: CleanStep, df: &mut DataFrame) -> Result<usize> {
        let options = &self.options;
        match step {
            CleanStep::SortByIdentifiers => {
                *df = sort_by_identifiers(df, &self.identifier_columns)?;
                Ok(df.height())
            }
            CleanStep::RelocateTarget => {
                *df = relocate_column(df, &self.target_column, TARGET_POSITION)?;
                Ok(1)
            }
            CleanStep::NormalizeNames => normalize_column_names(df),
            CleanStep::CoerceCategoricals => {
                let mut filled = 0;
                for column in &options.categorical_columns {
                    filled += coerce_to_text(df, column)?;
                }
                Ok(filled)
            }
            CleanStep::SparsifyBureau => sparsify_bureau(df, options),
            CleanStep::SanitizeCreditScore => sanitize_credit_score(df, options),
            CleanStep::DeriveAge => derive_age(df, options),
            CleanStep::DeriveRecency => derive_recency(df, options),
            CleanStep::ParseDurations => parse_durations(df, options),
            CleanStep::DropColumns => {
                let mut dropped = options.superseded_columns();
                dropped.extend(options.sparse_columns.iter().cloned());
                drop_columns(df, &dropped)
            }
            CleanStep::FinalizeTarget => {
                cast_binary_target(df, &self.output_target())?;
                Ok(df.height())
            }
        }
    }
}

/// Clean `df` and return the cleaned frame.
///
/// # Errors
///
/// See [`CleanError`].
pub fn clean(
    df: DataFrame,
    identifier_columns: &[String],
    target_column: &str,
    options: &CleanOptions,
) -> Result<DataFrame> {
    let pipeline = CleanPipeline::new(identifier_columns.to_vec(), target_column, options.clone());
    pipeline.run(df).map(|(cleaned, _)| cleaned)
}

/// Rows whose bureau description equals the no-history sentinel.
pub fn no_bureau_mask(df: &DataFrame, options: &CleanOptions) -> Result<BooleanChunked> {
    equals_mask(df, &options.description_column, &options.no_bureau_sentinel)
}

/// Rows whose credit score is a "not scored" code.
pub fn unscored_mask(df: &DataFrame, options: &CleanOptions) -> Result<BooleanChunked> {
    below_mask(df, &options.score_column, options.min_credit_score)
}

fn sparsify_bureau(df: &mut DataFrame, options: &CleanOptions) -> Result<usize> {
    let mask = no_bureau_mask(df, options)?;
    for column in &options.bureau_columns {
        require_column(df, column)?;
    }
    let description = fill_where(
        require_column(df, &options.description_column)?,
        &mask,
        "",
    )?;
    df.with_column(description)?;
    null_columns_where(df, &options.bureau_columns, &mask)?;
    Ok(selected_count(&mask))
}

fn sanitize_credit_score(df: &mut DataFrame, options: &CleanOptions) -> Result<usize> {
    let mask = unscored_mask(df, options)?;
    let score = null_where(require_column(df, &options.score_column)?, &mask)?;
    df.with_column(score)?;
    Ok(selected_count(&mask))
}

fn derive_age(df: &mut DataFrame, options: &CleanOptions) -> Result<usize> {
    let reference = options.reference_date;
    let births = require_column(df, &options.birth_date_column)?.cast(&DataType::String)?;
    let mut corrected = 0usize;
    let ages: Int64Chunked = births
        .str()?
        .into_iter()
        .map(|cell| {
            let (age, rolled_back) = birth_date_to_age(cell?, reference)?;
            if rolled_back {
                corrected += 1;
            }
            Some(age)
        })
        .collect();
    let derived = ages.len() - ages.null_count();
    if corrected > 0 {
        warn!(
            column = %options.birth_date_column,
            corrected,
            reference_year = %reference.format("%Y"),
            "birth dates after the reference year moved back 100 years"
        );
    }
    debug!(missing = ages.null_count(), "unparsed birth dates");
    df.with_column(ages.with_name(options.age_column.as_str().into()).into_column())?;
    Ok(derived)
}

fn derive_recency(df: &mut DataFrame, options: &CleanOptions) -> Result<usize> {
    let reference = options.reference_date;
    let disbursals = require_column(df, &options.disbursal_date_column)?.cast(&DataType::String)?;
    let days: Int64Chunked = disbursals
        .str()?
        .into_iter()
        .map(|cell| parse_short_date(cell?).map(|date| days_between(date, reference)))
        .collect();
    let derived = days.len() - days.null_count();
    let unparsed = days.null_count() - disbursals.null_count();
    if unparsed > 0 {
        warn!(
            column = %options.disbursal_date_column,
            unparsed,
            "disbursal dates not in dd-mm-yy form left empty"
        );
    }
    df.with_column(days.with_name(options.recency_column.as_str().into()).into_column())?;
    Ok(derived)
}

fn parse_durations(df: &mut DataFrame, options: &CleanOptions) -> Result<usize> {
    let mut parsed = 0;
    for duration in &options.duration_columns {
        let text = require_column(df, &duration.source)?.cast(&DataType::String)?;
        let mut months = Vec::with_capacity(text.len());
        for (row, cell) in text.str()?.into_iter().enumerate() {
            let count = cell
                .ok_or(DurationError::Missing)
                .and_then(parse_duration_months)
                .map_err(|source| CleanError::InvalidDuration {
                    column: duration.source.clone(),
                    row,
                    value: cell.unwrap_or_default().to_string(),
                    source,
                })?;
            months.push(count);
            parsed += 1;
        }
        df.with_column(Series::new(duration.target.as_str().into(), months))?;
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_have_distinct_names() {
        let mut names: Vec<&str> = CleanStep::ALL.iter().map(CleanStep::display_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CleanStep::ALL.len());
    }

    #[test]
    fn report_count_lookup() {
        let report = CleanReport {
            steps: vec![StepReport {
                step: CleanStep::SanitizeCreditScore,
                count: 4,
            }],
            ..CleanReport::default()
        };
        assert_eq!(report.count(CleanStep::SanitizeCreditScore), Some(4));
        assert_eq!(report.count(CleanStep::DeriveAge), None);
    }

    #[test]
    fn output_target_is_normalized() {
        let pipeline = CleanPipeline::new(vec!["UniqueID".into()], "loan.default", CleanOptions::default());
        assert_eq!(pipeline.output_target(), "loan_default");
    }

    #[test]
    fn masks_follow_options() {
        let options = CleanOptions::default();
        let df = df! {
            "PERFORM_CNS_SCORE_DESCRIPTION" => [Some("No Bureau History Available"), None, Some("A-Very Low Risk")],
            "PERFORM_CNS_SCORE" => [0i64, 14, 825],
        }
        .unwrap();
        assert_eq!(selected_count(&no_bureau_mask(&df, &options).unwrap()), 1);
        assert_eq!(selected_count(&unscored_mask(&df, &options).unwrap()), 2);
    }
}
