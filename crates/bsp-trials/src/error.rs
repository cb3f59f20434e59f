//! Error handling for trial segmentation
//!
//! Segmentation itself never fails; these errors cover layout
//! configuration and signal file parsing.

use core::fmt;

/// Result type alias for trial segmentation operations
pub type TrialResult<T> = Result<T, TrialError>;

/// Error type for layout configuration and signal loading
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TrialError {
    /// Trial length of zero samples
    InvalidTrialLength {
        /// Requested trial length
        length: usize,
    },

    /// Layout with no trials
    InvalidTrialCount {
        /// Requested trial count
        count: usize,
    },

    /// Trial count exceeds maximum supported
    TooManyTrials {
        /// Requested trial count
        requested: usize,
        /// Maximum supported trials
        max_supported: usize,
    },

    /// Total layout span does not fit in `usize`
    LayoutOverflow {
        /// Requested trial length
        trial_length: usize,
        /// Requested trial count
        trial_count: usize,
    },

    /// Sampling rate present but not a finite positive number
    InvalidSamplingRate {
        /// Provided sampling rate in Hz
        rate: f64,
    },

    /// Configuration could not be (de)serialized or is inconsistent
    ConfigurationError {
        /// Description of the configuration issue
        message: String,
    },

    /// Signal text could not be parsed into samples
    SignalFormatError {
        /// 1-based line number of the offending input, 0 when unknown
        line: usize,
        /// Description of format issue
        reason: String,
    },
}

impl fmt::Display for TrialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialError::InvalidTrialLength { length } => {
                write!(f, "Invalid trial length: {} samples, must be at least 1", length)
            }
            TrialError::InvalidTrialCount { count } => {
                write!(f, "Invalid trial count: {}, must be at least 1", count)
            }
            TrialError::TooManyTrials { requested, max_supported } => {
                write!(f, "Too many trials: requested {}, max supported {}",
                       requested, max_supported)
            }
            TrialError::LayoutOverflow { trial_length, trial_count } => {
                write!(f, "Layout overflow: {} trials of {} samples exceed addressable length",
                       trial_count, trial_length)
            }
            TrialError::InvalidSamplingRate { rate } => {
                write!(f, "Invalid sampling rate: {}Hz, must be finite and positive", rate)
            }
            TrialError::ConfigurationError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            TrialError::SignalFormatError { line, reason } => {
                if *line == 0 {
                    write!(f, "Signal format error: {}", reason)
                } else {
                    write!(f, "Signal format error at line {}: {}", line, reason)
                }
            }
        }
    }
}

impl std::error::Error for TrialError {}

/// Convenience macro for creating configuration errors
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)+) => {
        $crate::error::TrialError::ConfigurationError {
            message: format!($($arg)+),
        }
    };
}
