//! CLI command definitions and handlers

mod analyze;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Parse and validate display bin count (2-64)
fn parse_bins(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 2 {
        Err("bins must be at least 2".to_string())
    } else if n > 64 {
        Err("bins cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// Kerncut - histogram + density threshold explorer
#[derive(Parser, Debug)]
#[command(name = "kerncut")]
#[command(
    version,
    about = "Estimate classification thresholds for community characteristics from the extrema of histogram density curves",
    after_help = "\
Examples:
  kerncut characteristics.csv                    Analyze with defaults
  kerncut analyze characteristics.csv --format json
  kerncut analyze characteristics.csv --trim-outliers --plot-dir figures
  kerncut analyze characteristics.csv --no-plots -o report.txt"
)]
pub struct Cli {
    /// Path to the characteristics CSV
    #[arg(global = true)]
    pub input: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze the CSV: histograms, density curves, and threshold estimates
    Analyze {
        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Directory the figures are written to
        #[arg(long, default_value = "plots")]
        plot_dir: PathBuf,

        /// Display bin count (2-64)
        #[arg(long, default_value = "5", value_parser = parse_bins)]
        bins: usize,

        /// Drop observations outside 3x the interquartile range before estimating
        #[arg(long)]
        trim_outliers: bool,

        /// Skip figure rendering
        #[arg(long)]
        no_plots: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let input = cli
        .input
        .context("no input CSV given (pass a path to the characteristics file)")?;

    match cli.command {
        Some(Commands::Analyze {
            format,
            output,
            plot_dir,
            bins,
            trim_outliers,
            no_plots,
        }) => analyze::run(
            &input,
            &format,
            output.as_deref(),
            &plot_dir,
            bins,
            trim_outliers,
            no_plots,
        ),

        // bare invocation analyzes with defaults
        None => analyze::run(&input, "text", None, Path::new("plots"), 5, false, false),
    }
}
