use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use scorecard_ingest::{IngestOptions, read_csv_table, write_csv_table};
use scorecard_model::CleanOptions;
use scorecard_report::{
    CategoryDistribution, DatasetSummary, Histogram, HistogramComparison, category_distribution,
    compare_histograms, histogram, summarize,
};
use scorecard_transform::{CleanPipeline, CleanReport};

use crate::cli::{CategoryArgs, CleanArgs, CompareArgs, HistArgs, SummaryArgs};

/// Result of `scorecard-prep clean`.
#[derive(Debug)]
pub struct CleanOutcome {
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub report: CleanReport,
    /// Column summary of the cleaned table, when requested.
    pub summary: Option<DatasetSummary>,
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let options = clean_options(args)?;
    let span = info_span!(
        "clean_file",
        input = %args.input.display(),
        reference_date = %options.reference_date
    );
    let _guard = span.enter();

    let raw = load(&args.input)?;
    let pipeline = CleanPipeline::new(args.id_columns.clone(), &args.target, options);
    let start = Instant::now();
    let (mut cleaned, report) = pipeline
        .run(raw)
        .with_context(|| format!("clean {}", args.input.display()))?;
    info!(
        rows = cleaned.height(),
        columns = cleaned.width(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );

    write_csv_table(&mut cleaned, &args.output)
        .with_context(|| format!("write {}", args.output.display()))?;
    debug!(output = %args.output.display(), "cleaned table written");

    let summary = if args.summary {
        Some(summarize(&cleaned).context("summarize cleaned table")?)
    } else {
        None
    };
    Ok(CleanOutcome {
        output: args.output.clone(),
        rows: cleaned.height(),
        columns: cleaned.width(),
        report,
        summary,
    })
}

pub fn run_summary(args: &SummaryArgs) -> Result<DatasetSummary> {
    let df = load(&args.input)?;
    summarize(&df).with_context(|| format!("summarize {}", args.input.display()))
}

pub fn run_category(args: &CategoryArgs) -> Result<CategoryDistribution> {
    let df = load(&args.input)?;
    category_distribution(&df, &args.column, &args.target)
        .with_context(|| format!("break down {} by {}", args.column, args.target))
}

pub fn run_hist(args: &HistArgs) -> Result<Histogram> {
    let df = load(&args.input)?;
    histogram(&df, &args.column, args.bins)
        .with_context(|| format!("histogram of {}", args.column))
}

pub fn run_compare(args: &CompareArgs) -> Result<HistogramComparison> {
    let df = load(&args.input)?;
    compare_histograms(&df, &args.column, &args.target, args.bins)
        .with_context(|| format!("compare {} by {}", args.column, args.target))
}

/// Defaults, then the options file, then `--reference-date`.
fn clean_options(args: &CleanArgs) -> Result<CleanOptions> {
    let mut options = match &args.options {
        Some(path) => CleanOptions::from_json_file(path)
            .with_context(|| format!("load options {}", path.display()))?,
        None => CleanOptions::default(),
    };
    if let Some(date) = args.reference_date {
        options = options.with_reference_date(date);
    }
    Ok(options)
}

fn load(path: &Path) -> Result<DataFrame> {
    let start = Instant::now();
    let df = read_csv_table(path, &IngestOptions::default())
        .with_context(|| format!("read {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "table loaded"
    );
    Ok(df)
}
