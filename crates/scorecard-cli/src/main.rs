//! Loan-default scorecard data preparation CLI.

use anyhow::Result;
use clap::Parser;

use scorecard_cli::cli::{Cli, Command};
use scorecard_cli::commands::{run_category, run_clean, run_compare, run_hist, run_summary};
use scorecard_cli::logging::init_logging;
use scorecard_cli::summary::{print_clean_outcome, print_json};
use scorecard_report::render::{category_table, comparison_table, histogram_table, summary_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Clean(args) => {
            let outcome = run_clean(&args)?;
            print_clean_outcome(&outcome);
        }
        Command::Summary(args) => {
            let summary = run_summary(&args)?;
            if args.json {
                print_json(&summary)?;
            } else {
                println!("Dataset Shape: ({}, {})", summary.rows, summary.columns);
                println!("{}", summary_table(&summary));
            }
        }
        Command::Category(args) => {
            let distribution = run_category(&args)?;
            if args.json {
                print_json(&distribution)?;
            } else {
                println!("Number of loans - {}", distribution.column);
                println!("{}", category_table(&distribution));
            }
        }
        Command::Hist(args) => {
            let hist = run_hist(&args)?;
            if args.json {
                print_json(&hist)?;
            } else {
                println!("Distribution of {}", hist.column);
                println!("{}", histogram_table(&hist));
            }
        }
        Command::Compare(args) => {
            let comparison = run_compare(&args)?;
            if args.json {
                print_json(&comparison)?;
            } else {
                println!("Distribution of {} by {}", comparison.column, comparison.target);
                println!("{}", comparison_table(&comparison));
            }
        }
    }
    Ok(())
}
