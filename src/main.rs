//! Kerncut - histogram + kernel-density threshold explorer
//!
//! Loads a CSV of per-community characteristic metrics and estimates
//! classification thresholds by reading off extrema of smoothed density
//! curves, rendered alongside the legacy cutoffs for comparison.

mod cli;
mod dataset;
mod density;
mod features;
mod models;
mod plot;
mod reporters;
mod stats;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG overrides the --log-level default
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
