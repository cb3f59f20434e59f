//! Basic usage examples for BSP-Trials
//!
//! Splits a synthetic recording with the standard layout, then with a
//! custom layout loaded from JSON.

use bsp_trials::{
    divide_signal_into_trials, error::TrialResult, SegmentationConfig, TrialSegmenter,
};

fn main() -> TrialResult<()> {
    println!("=== BSP-Trials Basic Usage Examples ===\n");

    standard_layout_example();
    custom_layout_example()?;

    println!("=== All examples completed successfully! ===");
    Ok(())
}

/// Example 1: three trials of 3200 samples from a 2kHz recording
fn standard_layout_example() {
    println!("1. Standard three-trial split");

    // 5 seconds at 2kHz, a little longer than three trials
    let recording: Vec<f32> = (0..10_000)
        .map(|i| {
            let t = i as f32 / 2000.0;
            0.5 * (20.0 * t).sin() + 0.1 * (200.0 * t).sin()
        })
        .collect();

    let (trial1, trial2, trial3) = divide_signal_into_trials(&recording);

    println!("   Trial lengths: {}, {}, {}", trial1.len(), trial2.len(), trial3.len());
    println!("   Ignored tail: {} samples\n", recording.len().saturating_sub(9600));
}

/// Example 2: custom layout with durations and per-trial statistics
fn custom_layout_example() -> TrialResult<()> {
    println!("2. Custom layout from JSON");

    let json = r#"{
        "name": "Half-second trials",
        "trial_length": 1000,
        "trial_count": 4,
        "sampling_rate_hz": 2000.0
    }"#;
    let config = SegmentationConfig::from_json(json)?;
    let segmenter = TrialSegmenter::new(config)?;

    // Only 3.5 trials worth of data
    let recording: Vec<f64> = (0..3500).map(|i| (i as f64 * 0.05).cos()).collect();
    let set = segmenter.segment(&recording);

    for (trial, stats) in set.iter().zip(set.stats()) {
        println!(
            "   Trial {} @{}: {} samples, rms {:.3}{}",
            trial.index,
            trial.start,
            trial.len(),
            stats.rms,
            if trial.is_complete() { "" } else { " (truncated)" }
        );
    }

    if let Some(secs) = segmenter.config().trial_duration_secs() {
        println!("   Nominal trial duration: {:.2}s\n", secs);
    }

    Ok(())
}
