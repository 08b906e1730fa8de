//! Kernel density estimation and extremum-based threshold selection
//!
//! The estimator smooths a sample with a Gaussian kernel and proposes a
//! classification threshold at the curve's global minimum (the valley
//! between two clusters) or maximum (the dominant mode). The curve is
//! evaluated over the histogram support so the extremum seen is an
//! interior feature of the data, not a decaying tail.

mod histogram;

pub use histogram::{Bin, Histogram};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DensityError {
    #[error("cannot estimate a density from an empty sample")]
    EmptySample,
    #[error("sample contains a non-finite value at index {0}")]
    NonFinite(usize),
}

/// Which extremum of the density curve to read the threshold from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMode {
    /// Lowest curve point: the valley separating two clusters
    Min,
    /// Highest curve point: the dominant mode
    Max,
}

impl std::fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdMode::Min => write!(f, "min"),
            ThresholdMode::Max => write!(f, "max"),
        }
    }
}

/// Number of evaluation points along the sample range
const GRID_POINTS: usize = 200;

/// A smoothed density curve sampled on a fixed grid
#[derive(Debug, Clone)]
pub struct DensityCurve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Bandwidth actually used
    pub bandwidth: f64,
}

impl DensityCurve {
    /// Gaussian KDE with Scott's-rule bandwidth, evaluated on a 200-point
    /// grid from sample min to sample max.
    ///
    /// Zero-spread samples fall back to unit bandwidth; the curve is still
    /// produced but its extrema carry no information.
    pub fn estimate(sample: &[f64]) -> Result<Self, DensityError> {
        if sample.is_empty() {
            return Err(DensityError::EmptySample);
        }
        if let Some(idx) = sample.iter().position(|v| !v.is_finite()) {
            return Err(DensityError::NonFinite(idx));
        }

        let n = sample.len() as f64;
        let lo = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bandwidth = scott_bandwidth(sample);
        let step = (hi - lo) / (GRID_POINTS - 1) as f64;

        let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
        let mut xs = Vec::with_capacity(GRID_POINTS);
        let mut ys = Vec::with_capacity(GRID_POINTS);
        for i in 0..GRID_POINTS {
            let x = lo + step * i as f64;
            let mut acc = 0.0;
            for &v in sample {
                let u = (x - v) / bandwidth;
                acc += (-0.5 * u * u).exp();
            }
            xs.push(x);
            ys.push(acc * norm);
        }

        Ok(Self { xs, ys, bandwidth })
    }

    /// x-position of the curve extremum; ties resolve to the first point.
    pub fn threshold(&self, mode: ThresholdMode) -> f64 {
        let mut best = 0usize;
        for (i, &y) in self.ys.iter().enumerate() {
            let better = match mode {
                ThresholdMode::Min => y < self.ys[best],
                ThresholdMode::Max => y > self.ys[best],
            };
            if better {
                best = i;
            }
        }
        self.xs[best]
    }

    /// Curve rescaled from density units to histogram count units, for
    /// overlaying on count-scaled bars.
    pub fn to_counts(&self, observations: usize, bin_width: f64) -> Vec<(f64, f64)> {
        let scale = observations as f64 * bin_width;
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| (x, y * scale))
            .collect()
    }
}

/// Scott's rule: `h = s * n^(-1/5)` with `s` the ddof-1 standard deviation.
fn scott_bandwidth(sample: &[f64]) -> f64 {
    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    let variance = if sample.len() > 1 {
        sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };
    let h = variance.sqrt() * n.powf(-0.2);
    if h.is_finite() && h > 0.0 {
        h
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bimodal_sample() -> Vec<f64> {
        vec![
            1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 10.0, 10.0, 10.0, 10.0, 10.0,
        ]
    }

    #[test]
    fn test_empty_sample_is_an_error() {
        assert!(matches!(
            DensityCurve::estimate(&[]),
            Err(DensityError::EmptySample)
        ));
    }

    #[test]
    fn test_non_finite_sample_is_an_error() {
        let sample = vec![1.0, f64::NAN, 3.0];
        assert!(matches!(
            DensityCurve::estimate(&sample),
            Err(DensityError::NonFinite(1))
        ));
    }

    #[test]
    fn test_max_mode_finds_the_peak_of_a_unimodal_sample() {
        let sample = vec![
            47.0, 48.0, 48.0, 49.0, 49.0, 49.0, 50.0, 50.0, 50.0, 50.0, 51.0, 51.0, 51.0, 52.0,
            52.0, 53.0,
        ];
        let curve = DensityCurve::estimate(&sample).unwrap();
        let t = curve.threshold(ThresholdMode::Max);
        assert!((t - 50.0).abs() < 2.0, "peak at {t}, expected near 50");
    }

    #[test]
    fn test_min_mode_finds_the_valley_of_a_bimodal_sample() {
        let curve = DensityCurve::estimate(&bimodal_sample()).unwrap();
        let t = curve.threshold(ThresholdMode::Min);
        assert!(
            (3.0..=9.0).contains(&t),
            "valley at {t}, expected inside the 3-9 gap"
        );
    }

    #[test]
    fn test_threshold_is_deterministic() {
        let sample = bimodal_sample();
        let a = DensityCurve::estimate(&sample).unwrap();
        let b = DensityCurve::estimate(&sample).unwrap();
        assert_eq!(a.threshold(ThresholdMode::Min), b.threshold(ThresholdMode::Min));
        assert_eq!(a.xs, b.xs);
        assert_eq!(a.ys, b.ys);
    }

    #[test]
    fn test_max_mode_on_an_even_spread_lands_centrally() {
        let sample: Vec<f64> = (0..=100).map(|i| i as f64).collect();
        let curve = DensityCurve::estimate(&sample).unwrap();
        let t = curve.threshold(ThresholdMode::Max);
        assert!(
            (35.0..=65.0).contains(&t),
            "flat spread peaked at {t}, expected roughly central"
        );
        // and again, bit for bit
        let again = DensityCurve::estimate(&sample).unwrap();
        assert_eq!(t, again.threshold(ThresholdMode::Max));
    }

    #[test]
    fn test_curve_spans_the_sample_range() {
        let sample = bimodal_sample();
        let curve = DensityCurve::estimate(&sample).unwrap();
        assert_eq!(curve.xs.len(), 200);
        assert_eq!(*curve.xs.first().unwrap(), 1.0);
        assert!((curve.xs.last().unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_spread_sample_still_produces_a_curve() {
        let sample = vec![5.0; 8];
        let curve = DensityCurve::estimate(&sample).unwrap();
        assert_eq!(curve.bandwidth, 1.0);
        let t = curve.threshold(ThresholdMode::Max);
        assert!((t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_scaling_preserves_shape() {
        let sample = bimodal_sample();
        let curve = DensityCurve::estimate(&sample).unwrap();
        let scaled = curve.to_counts(sample.len(), 2.0);
        assert_eq!(scaled.len(), curve.xs.len());
        let scale = sample.len() as f64 * 2.0;
        assert!((scaled[10].1 - curve.ys[10] * scale).abs() < 1e-12);
    }
}
