//! Figure rendering via plotters
//!
//! One PNG per feature: count-scaled histogram bars, the density overlay,
//! vertical reference lines for the legacy cutoffs, the new estimate where
//! the feature table says to draw it, and a legend. Axis limits are fixed
//! per feature so figures stay comparable across runs.

use crate::density::{DensityCurve, Histogram};
use crate::features::{FeatureSpec, ORANGE_RED};
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const FIGURE_SIZE: (u32, u32) = (1024, 768);
const BAR_COLOR: RGBColor = RGBColor(110, 161, 205);
const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);

pub fn render(
    out_path: &Path,
    spec: &FeatureSpec,
    histogram: &Histogram,
    curve: &DensityCurve,
    estimate: Option<f64>,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x0, x1) = spec.x_range;
    let (y0, y1) = spec.y_range;
    let mut chart = ChartBuilder::on(&root)
        .caption(spec.kind.column(), ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    // horizontal gridlines only
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(spec.axis_label)
        .y_desc("Count")
        .draw()?;

    for bin in &histogram.bins {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bin.lo, 0.0), (bin.hi, bin.count as f64)],
            BAR_COLOR.mix(0.6).filled(),
        )))?;
    }
    for bin in &histogram.bins {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bin.lo, 0.0), (bin.hi, bin.count as f64)],
            BAR_COLOR.stroke_width(1),
        )))?;
    }

    let overlay = curve.to_counts(histogram.observations, histogram.bin_width);
    chart.draw_series(LineSeries::new(overlay, CURVE_COLOR.stroke_width(2)))?;

    for reference in spec.references {
        let (r, g, b) = reference.color;
        let color = RGBColor(r, g, b);
        let width = reference.stroke_width;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(reference.value, y0), (reference.value, y1)],
                color.stroke_width(width),
            )))?
            .label(reference.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    if let Some(value) = estimate {
        let (r, g, b) = ORANGE_RED;
        let color = RGBColor(r, g, b);
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(value, y0), (value, y1)],
                color.stroke_width(1),
            )))?
            .label("New Threshold")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
