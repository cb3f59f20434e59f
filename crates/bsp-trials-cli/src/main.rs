//! BSP-Trials command line front-end

mod cli;
mod report;

use anyhow::{Context, Result};
use bsp_trials::{SegmentationConfig, Signal, TrialSegmenter};
use clap::Parser;
use cli::{Cli, Commands, SplitArgs};
use report::SplitReport;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, Level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Split(args) => run_split(&args, &mut io::stdout().lock()),
        Commands::Config { output } => {
            let json = SegmentationConfig::default().to_json()?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "wrote default layout");
                }
                None => println!("{}", json),
            }
            Ok(())
        }
    }
}

fn run_split<W: Write>(args: &SplitArgs, out: &mut W) -> Result<()> {
    let layout = resolve_layout(args)?;
    let segmenter = TrialSegmenter::new(layout).context("Invalid trial layout")?;

    let signal = load_signal(&args.signal)?;
    info!(
        path = %args.signal.display(),
        samples = signal.len(),
        layout = %segmenter.config().name,
        "segmenting signal"
    );

    let set = segmenter.segment(signal.samples());
    let report = SplitReport::build(segmenter.config(), signal.len(), &set, args.include_samples);

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Layout from `--config` (or the default), then command line overrides
fn resolve_layout(args: &SplitArgs) -> Result<SegmentationConfig> {
    let mut layout = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            SegmentationConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => SegmentationConfig::default(),
    };

    if let Some(length) = args.trial_length {
        layout.trial_length = length;
    }
    if let Some(count) = args.trial_count {
        layout.trial_count = count;
    }
    if let Some(rate) = args.sampling_rate {
        layout.sampling_rate_hz = Some(rate);
    }

    Ok(layout)
}

fn load_signal(path: &Path) -> Result<Signal<f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read signal {}", path.display()))?;
    Signal::parse(&text).with_context(|| format!("Failed to parse signal {}", path.display()))
}
