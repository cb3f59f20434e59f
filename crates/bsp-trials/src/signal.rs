//! Signal: owned container for a one-dimensional sample sequence

use crate::error::{TrialError, TrialResult};
use serde::{Deserialize, Serialize};

/// Ordered sequence of numeric samples
///
/// Segmentation works on any `&[T]`; this wrapper exists for callers that
/// load or own their samples and want the loaders below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signal<T> {
    samples: Vec<T>,
}

impl<T> Signal<T> {
    /// Create a signal from owned samples
    pub fn new(samples: Vec<T>) -> Self {
        Self { samples }
    }

    /// Borrow the samples
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the signal holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Give back the owned samples
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }
}

impl<T> From<Vec<T>> for Signal<T> {
    fn from(samples: Vec<T>) -> Self {
        Self::new(samples)
    }
}

impl<T> AsRef<[T]> for Signal<T> {
    fn as_ref(&self) -> &[T] {
        &self.samples
    }
}

impl<T> FromIterator<T> for Signal<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Signal<f64> {
    /// Parse a signal from text.
    ///
    /// Input starting with `[` is read as a JSON array of numbers. Anything
    /// else is plain text: numbers separated by whitespace, commas or
    /// newlines, with `#` starting a comment that runs to end of line.
    pub fn parse(text: &str) -> TrialResult<Self> {
        if text.trim_start().starts_with('[') {
            Self::from_json(text)
        } else {
            Self::from_delimited(text)
        }
    }

    /// Parse a JSON array of numbers
    pub fn from_json(json: &str) -> TrialResult<Self> {
        serde_json::from_str::<Vec<f64>>(json)
            .map(Self::new)
            .map_err(|e| TrialError::SignalFormatError {
                line: e.line(),
                reason: e.to_string(),
            })
    }

    /// Parse whitespace/comma separated numbers
    pub fn from_delimited(text: &str) -> TrialResult<Self> {
        let mut samples = Vec::new();

        for (line_idx, line) in text.lines().enumerate() {
            let content = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };

            for token in content
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
            {
                let value = token.parse::<f64>().map_err(|_| TrialError::SignalFormatError {
                    line: line_idx + 1,
                    reason: format!("'{}' is not a number", token),
                })?;
                samples.push(value);
            }
        }

        Ok(Self::new(samples))
    }
}
