//! Exploratory reports for the loan-default dataset.
//!
//! - **summary**: per-column type, missingness, cardinality and sample values
//! - **category**: category-versus-target counts and default rates
//! - **histogram**: single-column histogram with mean, two-class comparison
//! - **render**: `comfy-table` renderings of the above
//!
//! Every report derives `Serialize` so callers can emit JSON instead of text.

mod category;
mod error;
mod histogram;
pub mod render;
mod summary;
mod values;

pub use category::{CategoryDistribution, CategoryRow, category_distribution};
pub use error::{ReportError, Result};
pub use histogram::{
    Bin, ClassHistogram, DEFAULT_BINS, Histogram, HistogramComparison, compare_histograms,
    histogram,
};
pub use summary::{ColumnSummary, DatasetSummary, summarize};
