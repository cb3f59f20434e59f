//! Command-Line Interface

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Split recorded signals into fixed-length trials
#[derive(Parser, Debug)]
#[command(name = "bsp-trials")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a signal file into trials and print a JSON report
    Split(SplitArgs),

    /// Print the default layout configuration as JSON
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Arguments for `split`
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Signal file: JSON array or whitespace/comma separated numbers
    pub signal: PathBuf,

    /// Layout configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override samples per trial
    #[arg(long)]
    pub trial_length: Option<usize>,

    /// Override number of trials
    #[arg(long)]
    pub trial_count: Option<usize>,

    /// Sampling rate in Hz, used to report durations
    #[arg(long)]
    pub sampling_rate: Option<f64>,

    /// Include the trial samples in the report
    #[arg(long)]
    pub include_samples: bool,
}
