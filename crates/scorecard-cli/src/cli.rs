//! CLI argument definitions for the scorecard data-preparation tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use scorecard_report::DEFAULT_BINS;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "scorecard-prep",
    version,
    about = "Prepare loan-default data for credit-scorecard modeling",
    long_about = "Clean a raw vehicle-loan default CSV for scorecard modeling and\n\
                  report on its columns: summary statistics, category default\n\
                  rates and histograms split by the target class."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw loan CSV and write the modeling-ready table.
    Clean(CleanArgs),

    /// Per-column type, missingness, cardinality and sample values.
    Summary(SummaryArgs),

    /// Loan counts and default rate per category of a column.
    Category(CategoryArgs),

    /// Histogram of a numeric column with its mean.
    Hist(HistArgs),

    /// Histograms of a numeric column for defaulted and non-defaulted loans.
    Compare(CompareArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw loan CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the cleaned CSV.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Identifier column(s) defining the row order; repeat for several.
    #[arg(long = "id", value_name = "COLUMN", required = true)]
    pub id_columns: Vec<String>,

    /// Binary target column.
    #[arg(long = "target", value_name = "COLUMN")]
    pub target: String,

    /// Date treated as "now" for ages and recency (default 2019-01-01).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,

    /// JSON file overriding the default cleaning options.
    #[arg(long = "options", value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Print a column summary of the cleaned table.
    #[arg(long = "summary")]
    pub summary: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CategoryArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Categorical column to break down.
    #[arg(long = "column", value_name = "COLUMN")]
    pub column: String,

    /// Binary target column.
    #[arg(long = "target", value_name = "COLUMN")]
    pub target: String,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct HistArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Numeric column to bin.
    #[arg(long = "column", value_name = "COLUMN")]
    pub column: String,

    /// Number of equal-width bins.
    #[arg(long = "bins", default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CompareArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Numeric column to bin.
    #[arg(long = "column", value_name = "COLUMN")]
    pub column: String,

    /// Binary target column splitting the two distributions.
    #[arg(long = "target", value_name = "COLUMN")]
    pub target: String,

    /// Number of equal-width bins shared by both classes.
    #[arg(long = "bins", default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    /// Build logging configuration from CLI flags with consistent precedence.
    ///
    /// `--log-level` beats `-v`/`-q`; with neither, `RUST_LOG` is honoured.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file = self.log_file.clone();
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}
