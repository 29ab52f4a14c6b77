//! Category-versus-target distribution.
//!
//! For each value of a categorical column: how many loans defaulted, how many
//! did not, and the within-category default rate.

use std::cmp::Ordering;
use std::collections::HashMap;

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::values::{binary_labels, text_values};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    pub column: String,
    pub target: String,
    pub rows: Vec<CategoryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    pub not_default: usize,
    pub default: usize,
    pub total: usize,
    /// `default / total`.
    pub default_rate: f64,
}

impl CategoryRow {
    pub fn not_default_rate(&self) -> f64 {
        1.0 - self.default_rate
    }
}

impl CategoryDistribution {
    /// Largest category count, used to scale bar glyphs.
    pub fn max_total(&self) -> usize {
        self.rows.iter().map(|row| row.total).max().unwrap_or(0)
    }

    /// Default rate over all counted loans.
    pub fn overall_default_rate(&self) -> f64 {
        let (defaults, total) = self
            .rows
            .iter()
            .fold((0, 0), |(d, t), row| (d + row.default, t + row.total));
        if total == 0 {
            0.0
        } else {
            defaults as f64 / total as f64
        }
    }
}

/// Cross-tabulate `column` against the binary `target`.
///
/// Rows missing either value are skipped. Categories sort numerically when
/// every category is a number and lexically otherwise.
pub fn category_distribution(
    df: &DataFrame,
    column: &str,
    target: &str,
) -> Result<CategoryDistribution> {
    let categories = text_values(df, column)?;
    let labels = binary_labels(df, target)?;

    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut skipped = 0usize;
    for (category, label) in categories.into_iter().zip(labels) {
        let (Some(category), Some(label)) = (category, label) else {
            skipped += 1;
            continue;
        };
        let entry = counts.entry(category).or_default();
        if label {
            entry.1 += 1;
        } else {
            entry.0 += 1;
        }
    }
    debug!(column, target, categories = counts.len(), skipped, "category counts");

    let mut rows: Vec<CategoryRow> = counts
        .into_iter()
        .map(|(category, (not_default, default))| {
            let total = not_default + default;
            CategoryRow {
                category,
                not_default,
                default,
                total,
                default_rate: default as f64 / total as f64,
            }
        })
        .collect();
    sort_categories(&mut rows);

    Ok(CategoryDistribution {
        column: column.to_string(),
        target: target.to_string(),
        rows,
    })
}

fn sort_categories(rows: &mut [CategoryRow]) {
    let all_numeric = rows.iter().all(|row| row.category.parse::<f64>().is_ok());
    if all_numeric {
        rows.sort_by(|a, b| {
            let a = a.category.parse::<f64>().unwrap_or(f64::NAN);
            let b = b.category.parse::<f64>().unwrap_or(f64::NAN);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        });
    } else {
        rows.sort_by(|a, b| a.category.cmp(&b.category));
    }
}
