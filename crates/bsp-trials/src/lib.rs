//! BSP-Trials: split recorded signals into fixed-length trials
//!
//! The standard layout is three contiguous trials of 3200 samples each.
//! Short signals give truncated trials, long ones have their tail ignored.

pub mod error;
pub mod config;
pub mod signal;
pub mod trial;
pub mod stats;
pub mod segmenter;

pub use error::{TrialError, TrialResult};
pub use config::{SegmentationConfig, MAX_TRIAL_COUNT, TRIAL_COUNT, TRIAL_LENGTH};
pub use signal::Signal;
pub use trial::{Trial, TrialSet};
pub use stats::TrialStats;
pub use segmenter::{divide_signal_into_trials, clamped_copy, TrialSegmenter};
