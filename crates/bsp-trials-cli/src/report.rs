//! JSON report for a segmented signal

use bsp_trials::{SegmentationConfig, TrialSet, TrialStats};
use serde::Serialize;

/// Report printed by `split`
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub layout: SegmentationConfig,
    pub signal_len: usize,
    pub complete: bool,
    pub discarded_samples: usize,
    pub trials: Vec<TrialReport>,
}

/// Per-trial entry
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    pub index: usize,
    pub start: usize,
    pub length: usize,
    pub nominal_length: usize,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    pub stats: TrialStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<f64>>,
}

impl SplitReport {
    /// Build a report from a segmentation result
    pub fn build(
        layout: &SegmentationConfig,
        signal_len: usize,
        set: &TrialSet<f64>,
        include_samples: bool,
    ) -> Self {
        let trials = set
            .iter()
            .map(|trial| TrialReport {
                index: trial.index,
                start: trial.start,
                length: trial.len(),
                nominal_length: trial.nominal_length,
                complete: trial.is_complete(),
                duration_secs: layout.sampling_rate_hz.map(|rate| trial.len() as f64 / rate),
                stats: trial.stats(),
                samples: include_samples.then(|| trial.samples.clone()),
            })
            .collect();

        Self {
            layout: layout.clone(),
            signal_len,
            complete: set.is_complete(),
            discarded_samples: set.discarded_samples,
            trials,
        }
    }
}
