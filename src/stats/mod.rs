//! Summary statistics and interquartile-range trimming

use serde::Serialize;

/// IQR multiplier for the opt-in outlier trim
pub const IQR_MULTIPLIER: f64 = 3.0;

/// Summary statistics for one feature sample
#[derive(Debug, Clone, Serialize)]
pub struct SeriesStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,
}

impl SeriesStats {
    /// Compute from finite values. Returns None for an empty sample.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        Some(SeriesStats {
            count: n,
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median,
            stddev: variance.sqrt(),
        })
    }
}

/// Linearly interpolated percentile of pre-sorted values
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

/// Keep values strictly inside `(q25 - k*iqr, q75 + k*iqr)`, preserving
/// input order. Returns the kept values and the dropped count.
pub fn iqr_trim(values: &[f64], multiplier: f64) -> (Vec<f64>, usize) {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let q25 = percentile(&sorted, 25.0);
    let q75 = percentile(&sorted, 75.0);
    let iqr = q75 - q25;
    let lo = q25 - multiplier * iqr;
    let hi = q75 + multiplier * iqr;

    let kept: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v > lo && *v < hi)
        .collect();
    let dropped = values.len() - kept.len();
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_of_a_small_sample() {
        let stats = SeriesStats::compute(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert!((stats.mean - 5.0).abs() < 1e-9);
        assert!((stats.median - 4.5).abs() < 1e-9);
        assert!((stats.stddev - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sample_has_no_stats() {
        assert!(SeriesStats::compute(&[]).is_none());
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 100.0), 4.0);
        assert!((percentile(&sorted, 50.0) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_trim_keeps_interior_points() {
        let values: Vec<f64> = (1..=12).map(|i| i as f64).collect();
        let (kept, dropped) = iqr_trim(&values, IQR_MULTIPLIER);
        assert_eq!(kept.len(), 12);
        assert_eq!(dropped, 0);
    }

    #[test]
    fn test_trim_drops_a_far_outlier() {
        let mut values: Vec<f64> = (1..=12).map(|i| i as f64).collect();
        values.push(10_000.0);
        let (kept, dropped) = iqr_trim(&values, IQR_MULTIPLIER);
        assert_eq!(dropped, 1);
        assert!(!kept.contains(&10_000.0));
        // original order preserved
        assert_eq!(kept[0], 1.0);
        assert_eq!(*kept.last().unwrap(), 12.0);
    }
}
