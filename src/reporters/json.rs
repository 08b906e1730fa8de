//! JSON reporter
//!
//! Outputs the full AnalysisReport as pretty-printed JSON, for piping to
//! jq or further processing.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
