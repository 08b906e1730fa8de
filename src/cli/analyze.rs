//! The analyze command: load, estimate, render, report

use crate::dataset::Dataset;
use crate::density::{DensityCurve, Histogram};
use crate::features;
use crate::models::{AnalysisReport, FeatureSummary, ReferenceThreshold};
use crate::plot;
use crate::reporters;
use crate::stats::{self, SeriesStats};
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing::{debug, info};

#[allow(clippy::too_many_arguments)]
pub fn run(
    input: &Path,
    format: &str,
    output: Option<&Path>,
    plot_dir: &Path,
    bins: usize,
    trim_outliers: bool,
    no_plots: bool,
) -> Result<()> {
    let dataset = Dataset::load(input)
        .with_context(|| format!("failed to load '{}'", input.display()))?;
    info!(rows = dataset.rows, "loaded {}", input.display());

    if !no_plots {
        std::fs::create_dir_all(plot_dir)
            .with_context(|| format!("failed to create plot dir '{}'", plot_dir.display()))?;
    }

    let mut summaries = Vec::new();
    for spec in features::specs() {
        let column = spec.kind.column();
        let raw = dataset.sample(spec.kind);
        let (values, outliers_dropped) = if trim_outliers {
            stats::iqr_trim(raw, stats::IQR_MULTIPLIER)
        } else {
            (raw.to_vec(), 0)
        };

        let series = SeriesStats::compute(&values)
            .with_context(|| format!("column '{column}' has no rows left after trimming"))?;
        let histogram = Histogram::from_sample(&values, bins)
            .with_context(|| format!("binning failed for '{column}'"))?;
        let curve = DensityCurve::estimate(&values)
            .with_context(|| format!("density estimation failed for '{column}'"))?;
        debug!(
            column,
            bandwidth = curve.bandwidth,
            "estimated density curve"
        );

        let threshold = spec.mode.map(|mode| curve.threshold(mode));

        let plot_path = if no_plots {
            None
        } else {
            let path = plot_dir.join(format!("{}.png", spec.kind.slug()));
            let drawn = threshold.filter(|_| spec.draw_estimate);
            plot::render(&path, spec, &histogram, &curve, drawn)
                .map_err(|e| anyhow!("failed to render '{}': {e}", path.display()))?;
            info!("wrote {}", path.display());
            Some(path)
        };

        summaries.push(FeatureSummary {
            feature: spec.kind,
            column: column.to_string(),
            stats: series,
            mode: spec.mode,
            threshold,
            reference_thresholds: spec
                .references
                .iter()
                .map(|r| ReferenceThreshold {
                    label: r.label.to_string(),
                    value: r.value,
                })
                .collect(),
            outliers_dropped,
            plot: plot_path,
        });
    }

    let report = AnalysisReport {
        input: input.to_path_buf(),
        rows: dataset.rows,
        bins,
        trimmed: trim_outliers,
        features: summaries,
    };

    let rendered = reporters::report(&report, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
