//! Equal-width histograms of numeric columns.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::values::{binary_labels, numeric_values};

/// Bin count used when the caller does not pick one.
pub const DEFAULT_BINS: usize = 25;

/// Histogram of one column with its mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub column: String,
    /// `counts.len() + 1` ascending edges; the last bin is closed.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    /// Non-missing values counted.
    pub total: usize,
    pub mean: f64,
}

/// One bin of a histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl Histogram {
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.counts.iter().enumerate().map(|(idx, &count)| Bin {
            lower: self.edges[idx],
            upper: self.edges[idx + 1],
            count,
        })
    }

    /// Index of the bin holding the mean.
    pub fn mean_bin(&self) -> usize {
        bin_index(&self.edges, self.mean)
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Histogram of one target class within a [`HistogramComparison`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassHistogram {
    pub label: i64,
    pub counts: Vec<usize>,
    /// Per-bin share of the class; sums to 1 unless the class is empty.
    pub probabilities: Vec<f64>,
    pub total: usize,
    pub mean: Option<f64>,
}

/// Distributions of one column for non-defaulted and defaulted loans over
/// shared bin edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramComparison {
    pub column: String,
    pub target: String,
    pub edges: Vec<f64>,
    pub not_default: ClassHistogram,
    pub default: ClassHistogram,
}

/// Histogram of `column` over its non-missing values.
pub fn histogram(df: &DataFrame, column: &str, bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(ReportError::InvalidBins);
    }
    let values: Vec<f64> = numeric_values(df, column)?.into_iter().flatten().collect();
    let edges = equal_width_edges(&values, bins).ok_or_else(|| ReportError::NoValues {
        column: column.to_string(),
    })?;
    let counts = count_bins(&edges, &values);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    debug!(column, bins, total = values.len(), mean, "histogram built");
    Ok(Histogram {
        column: column.to_string(),
        edges,
        counts,
        total: values.len(),
        mean,
    })
}

/// Compare the distribution of `column` between the two target classes.
///
/// Rows missing either value are skipped. Both classes share the bin edges
/// computed over all counted rows.
pub fn compare_histograms(
    df: &DataFrame,
    column: &str,
    target: &str,
    bins: usize,
) -> Result<HistogramComparison> {
    if bins == 0 {
        return Err(ReportError::InvalidBins);
    }
    let values = numeric_values(df, column)?;
    let labels = binary_labels(df, target)?;

    let mut not_default = Vec::new();
    let mut default = Vec::new();
    for (value, label) in values.into_iter().zip(labels) {
        match (value, label) {
            (Some(v), Some(false)) => not_default.push(v),
            (Some(v), Some(true)) => default.push(v),
            _ => {}
        }
    }
    let all: Vec<f64> = not_default.iter().chain(&default).copied().collect();
    let edges = equal_width_edges(&all, bins).ok_or_else(|| ReportError::NoValues {
        column: column.to_string(),
    })?;
    debug!(
        column,
        target,
        not_default = not_default.len(),
        default = default.len(),
        "histogram comparison built"
    );
    Ok(HistogramComparison {
        column: column.to_string(),
        target: target.to_string(),
        not_default: class_histogram(0, &edges, &not_default),
        default: class_histogram(1, &edges, &default),
        edges,
    })
}

fn class_histogram(label: i64, edges: &[f64], values: &[f64]) -> ClassHistogram {
    let counts = count_bins(edges, values);
    let total = values.len();
    let probabilities = counts
        .iter()
        .map(|&count| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            }
        })
        .collect();
    let mean = (total > 0).then(|| values.iter().sum::<f64>() / total as f64);
    ClassHistogram {
        label,
        counts,
        probabilities,
        total,
        mean,
    }
}

/// `bins + 1` equal-width edges spanning the values; None when empty.
///
/// A constant column gets a unit-wide range centred on its value.
fn equal_width_edges(values: &[f64], bins: usize) -> Option<Vec<f64>> {
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    let (low, high) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (high - low) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|idx| low + width * idx as f64).collect();
    edges.push(high);
    Some(edges)
}

fn bin_index(edges: &[f64], value: f64) -> usize {
    let bins = edges.len() - 1;
    let low = edges[0];
    let width = (edges[bins] - low) / bins as f64;
    let idx = ((value - low) / width).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(bins - 1)
    }
}

fn count_bins(edges: &[f64], values: &[f64]) -> Vec<usize> {
    let mut counts = vec![0; edges.len() - 1];
    for &value in values {
        counts[bin_index(edges, value)] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_span_values() {
        let edges = equal_width_edges(&[20.0, 30.0, 40.0], 4).unwrap();
        assert_eq!(edges, vec![20.0, 25.0, 30.0, 35.0, 40.0]);
        assert!(equal_width_edges(&[], 4).is_none());
    }

    #[test]
    fn constant_values_get_unit_range() {
        let edges = equal_width_edges(&[7.0, 7.0], 2).unwrap();
        assert_eq!(edges, vec![6.5, 7.0, 7.5]);
        assert_eq!(count_bins(&edges, &[7.0, 7.0]), vec![0, 2]);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let edges = vec![0.0, 5.0, 10.0];
        assert_eq!(count_bins(&edges, &[0.0, 4.9, 5.0, 10.0]), vec![2, 2]);
    }

    #[test]
    fn histogram_skips_missing_and_reports_mean() {
        let df = df! { "AgeInYear" => [Some(20i64), None, Some(30), Some(40)] }.unwrap();
        let hist = histogram(&df, "AgeInYear", 2).unwrap();
        assert_eq!(hist.total, 3);
        assert_eq!(hist.counts, vec![1, 2]);
        assert_eq!(hist.mean, 30.0);
        assert_eq!(hist.mean_bin(), 1);
        let bins: Vec<Bin> = hist.bins().collect();
        assert_eq!(bins[0].upper, 30.0);
    }

    #[test]
    fn text_columns_are_rejected() {
        let df = df! { "Employment_Type" => ["Salaried"] }.unwrap();
        assert!(matches!(
            histogram(&df, "Employment_Type", 5),
            Err(ReportError::NotNumeric { .. })
        ));
    }

    #[test]
    fn zero_bins_are_rejected() {
        let df = df! { "ltv" => [1.0f64] }.unwrap();
        assert!(matches!(histogram(&df, "ltv", 0), Err(ReportError::InvalidBins)));
    }

    #[test]
    fn class_probabilities_sum_to_one() {
        let df = df! {
            "ltv" => [50.0f64, 60.0, 70.0, 80.0, 90.0],
            "loan_default" => [0i64, 0, 1, 0, 1],
        }
        .unwrap();
        let cmp = compare_histograms(&df, "ltv", "loan_default", 4).unwrap();
        assert_eq!(cmp.edges.len(), 5);
        assert_eq!(cmp.not_default.total, 3);
        assert_eq!(cmp.default.total, 2);
        for class in [&cmp.not_default, &cmp.default] {
            let sum: f64 = class.probabilities.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
        assert_eq!(cmp.default.mean, Some(80.0));
    }
}
