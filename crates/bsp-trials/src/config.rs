//! Trial layout configuration

use crate::config_error;
use crate::error::{TrialError, TrialResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Samples per trial in the standard layout
pub const TRIAL_LENGTH: usize = 3200;

/// Trials per signal in the standard layout
pub const TRIAL_COUNT: usize = 3;

/// Upper bound on trials per layout; one record is built per trial
pub const MAX_TRIAL_COUNT: usize = 1_000_000;

/// Layout of contiguous, non-overlapping trials starting at sample 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Configuration name/profile
    pub name: String,
    /// Samples per trial
    pub trial_length: usize,
    /// Number of trials
    pub trial_count: usize,
    /// Sampling rate in Hz, used only for durations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling_rate_hz: Option<f64>,
}

impl SegmentationConfig {
    /// Standard layout: three trials of 3200 samples
    pub fn three_trials() -> Self {
        Self {
            name: "Three trials".to_string(),
            trial_length: TRIAL_LENGTH,
            trial_count: TRIAL_COUNT,
            sampling_rate_hz: None,
        }
    }

    /// Custom layout
    pub fn new(name: &str, trial_length: usize, trial_count: usize) -> Self {
        Self {
            name: name.to_string(),
            trial_length,
            trial_count,
            sampling_rate_hz: None,
        }
    }

    /// Attach a sampling rate
    pub fn with_sampling_rate(mut self, rate_hz: f64) -> Self {
        self.sampling_rate_hz = Some(rate_hz);
        self
    }

    /// Validate the layout
    pub fn validate(&self) -> TrialResult<()> {
        if self.trial_length == 0 {
            return Err(TrialError::InvalidTrialLength { length: self.trial_length });
        }

        if self.trial_count == 0 {
            return Err(TrialError::InvalidTrialCount { count: self.trial_count });
        }

        if self.trial_count > MAX_TRIAL_COUNT {
            return Err(TrialError::TooManyTrials {
                requested: self.trial_count,
                max_supported: MAX_TRIAL_COUNT,
            });
        }

        if self.trial_length.checked_mul(self.trial_count).is_none() {
            return Err(TrialError::LayoutOverflow {
                trial_length: self.trial_length,
                trial_count: self.trial_count,
            });
        }

        if let Some(rate) = self.sampling_rate_hz {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(TrialError::InvalidSamplingRate { rate });
            }
        }

        Ok(())
    }

    /// Total number of source samples covered by the layout
    pub fn span(&self) -> usize {
        self.trial_length.saturating_mul(self.trial_count)
    }

    /// Nominal source range of trial `index`, before clamping
    pub fn trial_range(&self, index: usize) -> Range<usize> {
        let start = index.saturating_mul(self.trial_length);
        start..start.saturating_add(self.trial_length)
    }

    /// Duration of one full trial in seconds, if the sampling rate is known
    pub fn trial_duration_secs(&self) -> Option<f64> {
        self.sampling_rate_hz.map(|rate| self.trial_length as f64 / rate)
    }

    /// Export configuration to JSON
    pub fn to_json(&self) -> TrialResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| config_error!("Failed to serialize configuration: {}", e))
    }

    /// Import and validate configuration from JSON
    pub fn from_json(json: &str) -> TrialResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| config_error!("Failed to deserialize configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self::three_trials()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = SegmentationConfig::default();
        assert_eq!(config.trial_length, 3200);
        assert_eq!(config.trial_count, 3);
        assert_eq!(config.span(), 9600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trial_ranges() {
        let config = SegmentationConfig::three_trials();
        assert_eq!(config.trial_range(0), 0..3200);
        assert_eq!(config.trial_range(1), 3200..6400);
        assert_eq!(config.trial_range(2), 6400..9600);
    }

    #[test]
    fn test_config_validation() {
        let mut config = SegmentationConfig::three_trials();

        config.trial_length = 0;
        assert_eq!(config.validate(), Err(TrialError::InvalidTrialLength { length: 0 }));

        config.trial_length = 100;
        config.trial_count = 0;
        assert_eq!(config.validate(), Err(TrialError::InvalidTrialCount { count: 0 }));

        config.trial_count = MAX_TRIAL_COUNT + 1;
        assert_eq!(config.validate(), Err(TrialError::TooManyTrials {
            requested: MAX_TRIAL_COUNT + 1,
            max_supported: MAX_TRIAL_COUNT,
        }));

        config.trial_count = MAX_TRIAL_COUNT;
        assert!(config.validate().is_ok());

        config.trial_count = 2;
        config.trial_length = usize::MAX;
        assert!(matches!(config.validate(), Err(TrialError::LayoutOverflow { .. })));

        config.trial_length = 100;
        config.sampling_rate_hz = Some(0.0);
        assert!(matches!(config.validate(), Err(TrialError::InvalidSamplingRate { .. })));

        config.sampling_rate_hz = Some(f64::NAN);
        assert!(config.validate().is_err());

        config.sampling_rate_hz = Some(1000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trial_duration() {
        let config = SegmentationConfig::three_trials();
        assert_eq!(config.trial_duration_secs(), None);

        let config = config.with_sampling_rate(1600.0);
        assert_eq!(config.trial_duration_secs(), Some(2.0));
    }

    #[test]
    fn test_json_serialization() {
        let config = SegmentationConfig::new("Short", 250, 4).with_sampling_rate(500.0);

        let json = config.to_json().unwrap();
        assert!(json.contains("\"trial_length\": 250"));

        let deserialized = SegmentationConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_json_without_sampling_rate() {
        let json = r#"{ "name": "Plain", "trial_length": 10, "trial_count": 2 }"#;
        let config = SegmentationConfig::from_json(json).unwrap();
        assert_eq!(config.sampling_rate_hz, None);
        assert!(!config.to_json().unwrap().contains("sampling_rate_hz"));
    }

    #[test]
    fn test_json_rejects_invalid_layout() {
        let json = r#"{ "name": "Broken", "trial_length": 0, "trial_count": 3 }"#;
        assert!(matches!(
            SegmentationConfig::from_json(json),
            Err(TrialError::InvalidTrialLength { .. })
        ));

        assert!(matches!(
            SegmentationConfig::from_json("not json"),
            Err(TrialError::ConfigurationError { .. })
        ));
    }
}
