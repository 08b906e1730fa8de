//! Text (terminal) reporter with ANSI colors

use crate::models::AnalysisReport;
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const MAGENTA: &str = "\x1b[35m";
const ORANGE: &str = "\x1b[33m";

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Kerncut Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Input: {}  Rows: {}  Bins: {}{}\n",
        report.input.display(),
        report.rows,
        report.bins,
        if report.trimmed { "  (outliers trimmed)" } else { "" }
    ));

    for feature in &report.features {
        out.push_str(&format!("\n{BOLD}{}{RESET}\n", feature.column));
        let s = &feature.stats;
        out.push_str(&format!(
            "  count {}  min {:.3}  max {:.3}  mean {:.3}  median {:.3}  stddev {:.3}\n",
            s.count, s.min, s.max, s.mean, s.median, s.stddev
        ));
        if feature.outliers_dropped > 0 {
            out.push_str(&format!(
                "  {DIM}{} outlier(s) dropped{RESET}\n",
                feature.outliers_dropped
            ));
        }

        match (feature.mode, feature.threshold) {
            (Some(mode), Some(threshold)) => {
                out.push_str(&format!(
                    "  {ORANGE}new threshold ({mode}): {threshold}{RESET}\n"
                ));
            }
            _ => out.push_str(&format!("  {DIM}no threshold estimated{RESET}\n")),
        }

        for reference in &feature.reference_thresholds {
            out.push_str(&format!(
                "  {MAGENTA}{}: {}{RESET}\n",
                reference.label.to_lowercase(),
                reference.value
            ));
        }

        if let Some(plot) = &feature.plot {
            out.push_str(&format!("  {DIM}figure: {}{RESET}\n", plot.display()));
        }
    }

    Ok(out)
}
