//! Trial and TrialSet: owned segments produced by the segmenter

use crate::stats::TrialStats;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// One contiguous segment copied out of a signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial<T> {
    /// Position in the layout, 0-based
    pub index: usize,
    /// Offset of the first sample in the source signal
    pub start: usize,
    /// Length the trial has when the source is long enough
    pub nominal_length: usize,
    /// Copied samples, possibly fewer than `nominal_length`
    pub samples: Vec<T>,
}

impl<T> Trial<T> {
    /// Number of samples actually held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the trial is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the trial holds its full nominal length
    pub fn is_complete(&self) -> bool {
        self.samples.len() == self.nominal_length
    }

    /// Source index range this trial was copied from
    pub fn source_range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.samples.len()
    }

    /// Give back the owned samples
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }
}

impl<T: ToPrimitive> Trial<T> {
    /// Summary statistics of the samples
    pub fn stats(&self) -> TrialStats {
        TrialStats::calculate(&self.samples)
    }
}

/// Trials produced by one segmentation call, in layout order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialSet<T> {
    /// Trials in order of their source offset
    pub trials: Vec<Trial<T>>,
    /// Source samples beyond the layout span, ignored
    pub discarded_samples: usize,
}

impl<T> TrialSet<T> {
    /// Number of trials in the layout
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Check if the layout produced no trials
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Get a trial by layout index
    pub fn get(&self, index: usize) -> Option<&Trial<T>> {
        self.trials.get(index)
    }

    /// Iterate over trials
    pub fn iter(&self) -> std::slice::Iter<'_, Trial<T>> {
        self.trials.iter()
    }

    /// Whether every trial holds its full nominal length
    pub fn is_complete(&self) -> bool {
        self.trials.iter().all(Trial::is_complete)
    }

    /// Indices of trials shorter than nominal, including empty ones
    pub fn truncated_trials(&self) -> Vec<usize> {
        self.trials
            .iter()
            .filter(|trial| !trial.is_complete())
            .map(|trial| trial.index)
            .collect()
    }

    /// Total number of samples held across all trials
    pub fn total_samples(&self) -> usize {
        self.trials.iter().map(Trial::len).sum()
    }

    /// Drop the metadata and keep only the sample vectors
    pub fn into_sample_vecs(self) -> Vec<Vec<T>> {
        self.trials.into_iter().map(Trial::into_samples).collect()
    }

    /// Convert into the classic `(trial1, trial2, trial3)` tuple.
    ///
    /// Returns `None` unless the layout has exactly three trials.
    pub fn into_tuple(self) -> Option<(Vec<T>, Vec<T>, Vec<T>)> {
        let mut samples = self.into_sample_vecs().into_iter();
        match (samples.next(), samples.next(), samples.next(), samples.next()) {
            (Some(first), Some(second), Some(third), None) => Some((first, second, third)),
            _ => None,
        }
    }
}

impl<T: Clone> TrialSet<T> {
    /// Concatenation of all trials in order
    pub fn concatenated(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.total_samples());
        for trial in &self.trials {
            out.extend_from_slice(&trial.samples);
        }
        out
    }
}

impl<T: ToPrimitive> TrialSet<T> {
    /// Statistics for every trial, in layout order
    pub fn stats(&self) -> Vec<TrialStats> {
        self.trials.iter().map(Trial::stats).collect()
    }
}

impl<'a, T> IntoIterator for &'a TrialSet<T> {
    type Item = &'a Trial<T>;
    type IntoIter = std::slice::Iter<'a, Trial<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.trials.iter()
    }
}
