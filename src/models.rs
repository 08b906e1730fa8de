//! Report data model
//!
//! Everything the reporters need about one analysis run, serializable for
//! the JSON format.

use crate::density::ThresholdMode;
use crate::features::FeatureKind;
use crate::stats::SeriesStats;
use serde::Serialize;
use std::path::PathBuf;

/// A legacy cutoff carried along for comparison
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceThreshold {
    pub label: String,
    pub value: f64,
}

/// One analyzed feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub feature: FeatureKind,
    pub column: String,
    pub stats: SeriesStats,
    /// Which curve extremum the estimate was read from, when configured
    pub mode: Option<ThresholdMode>,
    /// The proposed new threshold, when a mode is configured
    pub threshold: Option<f64>,
    pub reference_thresholds: Vec<ReferenceThreshold>,
    /// Observations dropped by the opt-in IQR trim
    pub outliers_dropped: usize,
    /// Rendered figure, when plotting is enabled
    pub plot: Option<PathBuf>,
}

/// The full analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub input: PathBuf,
    pub rows: usize,
    pub bins: usize,
    pub trimmed: bool,
    pub features: Vec<FeatureSummary>,
}
