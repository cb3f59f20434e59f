//! Summary statistics for a trial

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Basic statistics for one trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialStats {
    pub mean: f64,
    pub rms: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub peak_to_peak: f64,
}

impl TrialStats {
    /// Compute statistics over any samples convertible to `f64`.
    ///
    /// Only finite samples contribute: NaN, infinities and values that
    /// cannot be represented as `f64` are skipped by every statistic. A
    /// trial with no finite samples yields all-zero statistics.
    pub fn calculate<T: ToPrimitive>(samples: &[T]) -> Self {
        let data: Vec<f64> = samples
            .iter()
            .filter_map(|x| x.to_f64())
            .filter(|x| x.is_finite())
            .collect();

        if data.is_empty() {
            return Self::zeroed();
        }

        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;

        let sum_sq: f64 = data.iter().map(|x| x * x).sum();
        let rms = (sum_sq / n).sqrt();

        let variance = data
            .iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        let min = data.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = data.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        Self {
            mean,
            rms,
            std_dev,
            min,
            max,
            peak_to_peak: max - min,
        }
    }

    fn zeroed() -> Self {
        Self {
            mean: 0.0,
            rms: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            peak_to_peak: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trial_is_zeroed() {
        let stats = TrialStats::calculate::<f32>(&[]);
        assert_eq!(stats, TrialStats::zeroed());
    }

    #[test]
    fn test_integer_samples() {
        let stats = TrialStats::calculate(&[1i16, 2, 3, 4]);

        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.peak_to_peak, 3.0);
        assert!((stats.rms - 7.5f64.sqrt()).abs() < 1e-12);
        assert!((stats.std_dev - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_samples_skipped() {
        let stats = TrialStats::calculate(&[1.0, f64::NAN, 3.0, f64::INFINITY, f64::NEG_INFINITY]);

        assert_eq!(stats, TrialStats::calculate(&[1.0, 3.0]));
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert!(stats.rms.is_finite());
        assert!(stats.std_dev.is_finite());
    }

    #[test]
    fn test_all_nan_trial_is_zeroed() {
        let stats = TrialStats::calculate(&[f32::NAN, f32::NAN]);
        assert_eq!(stats, TrialStats::zeroed());
    }

    #[test]
    fn test_constant_signal() {
        let stats = TrialStats::calculate(&vec![-2.0f32; 3200]);

        assert_eq!(stats.mean, -2.0);
        assert_eq!(stats.rms, 2.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.peak_to_peak, 0.0);
    }
}
