//! Equal-width display binning

use super::DensityError;

/// One display bin, `[lo, hi)` except the last which also includes `hi`
#[derive(Debug, Clone, Copy)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Fixed-bin-count histogram over the sample range
#[derive(Debug, Clone)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    pub bin_width: f64,
    pub observations: usize,
}

impl Histogram {
    pub fn from_sample(sample: &[f64], bins: usize) -> Result<Self, DensityError> {
        if sample.is_empty() {
            return Err(DensityError::EmptySample);
        }
        if let Some(idx) = sample.iter().position(|v| !v.is_finite()) {
            return Err(DensityError::NonFinite(idx));
        }

        let lo = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = hi - lo;
        // zero-spread samples collapse into a single unit-width bin
        let bin_width = if span > 0.0 { span / bins as f64 } else { 1.0 };

        let mut counts = vec![0usize; bins];
        for &v in sample {
            let mut idx = ((v - lo) / bin_width) as usize;
            if idx >= bins {
                idx = bins - 1;
            }
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                lo: lo + bin_width * i as f64,
                hi: lo + bin_width * (i + 1) as f64,
                count,
            })
            .collect();

        Ok(Self {
            bins,
            bin_width,
            observations: sample.len(),
        })
    }
}
