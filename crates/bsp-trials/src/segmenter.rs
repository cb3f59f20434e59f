//! Trial segmentation
//!
//! Splits a signal into contiguous, non-overlapping trials starting at
//! sample 0. Ranges past the end of the signal are clamped, so short input
//! gives short or empty trials instead of a panic, and samples beyond the
//! last trial are ignored. Every trial is an owned copy.

use crate::config::{SegmentationConfig, TRIAL_COUNT, TRIAL_LENGTH};
use crate::error::TrialResult;
use crate::trial::{Trial, TrialSet};
use std::ops::Range;
use tracing::{debug, trace};

/// Split `signal` into three trials of [`TRIAL_LENGTH`] samples.
///
/// Trial `n` holds the samples at `[n * 3200, (n + 1) * 3200)`. A signal
/// shorter than 9600 samples yields shorter (possibly empty) trials; samples
/// from 9600 on are not included anywhere.
pub fn divide_signal_into_trials<T: Copy>(signal: &[T]) -> (Vec<T>, Vec<T>, Vec<T>) {
    (
        clamped_copy(signal, 0..TRIAL_LENGTH),
        clamped_copy(signal, TRIAL_LENGTH..2 * TRIAL_LENGTH),
        clamped_copy(signal, 2 * TRIAL_LENGTH..TRIAL_COUNT * TRIAL_LENGTH),
    )
}

/// Copy `signal[range]` with both bounds clamped to the signal length
pub fn clamped_copy<T: Copy>(signal: &[T], range: Range<usize>) -> Vec<T> {
    let end = range.end.min(signal.len());
    let start = range.start.min(end);
    signal[start..end].to_vec()
}

/// Segmenter for an arbitrary validated layout
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSegmenter {
    config: SegmentationConfig,
}

impl TrialSegmenter {
    /// Create a segmenter, validating the layout once.
    ///
    /// Layouts above [`MAX_TRIAL_COUNT`](crate::config::MAX_TRIAL_COUNT)
    /// trials are rejected here so that `segment` stays infallible.
    pub fn new(config: SegmentationConfig) -> TrialResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the layout configuration
    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Split `signal` according to the layout.
    ///
    /// Always returns `trial_count` trials; never fails.
    pub fn segment<T: Copy>(&self, signal: &[T]) -> TrialSet<T> {
        let span = self.config.span();

        let trials: Vec<Trial<T>> = (0..self.config.trial_count)
            .map(|index| {
                let range = self.config.trial_range(index);
                Trial {
                    index,
                    start: range.start,
                    nominal_length: self.config.trial_length,
                    samples: clamped_copy(signal, range),
                }
            })
            .collect();

        if signal.len() < span {
            debug!(
                layout = %self.config.name,
                signal_len = signal.len(),
                span,
                "signal shorter than layout, trailing trials truncated"
            );
        }

        let discarded_samples = signal.len().saturating_sub(span);
        if discarded_samples > 0 {
            trace!(discarded_samples, "ignoring samples beyond layout span");
        }

        TrialSet { trials, discarded_samples }
    }
}

impl Default for TrialSegmenter {
    fn default() -> Self {
        Self { config: SegmentationConfig::three_trials() }
    }
}
