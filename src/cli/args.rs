//! Command line argument parsing for the Coldfind CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Coldfind - cold-cache microbenchmarks for array search strategies
#[derive(Parser, Debug, Clone)]
#[command(name = "coldfind")]
#[command(about = "Cold-cache microbenchmarks for array search strategies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ColdfindArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ColdfindArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Benchmark linear-scan strategies against the library find baseline
    Find(FindArgs),

    /// Benchmark the quaternary lower bound against the library baseline
    #[command(name = "lower-bound")]
    LowerBound(LowerBoundArgs),
}

/// Arguments for the find benchmark
#[derive(Parser, Debug, Clone)]
pub struct FindArgs {
    /// Largest element count in the sweep (element counts double from 8)
    #[arg(value_name = "MAX_ELEMENTS")]
    pub max_elements: usize,

    /// Trials averaged per configuration
    #[arg(short, long, default_value = "10")]
    pub trials: usize,

    /// Backing array length as a power of two
    #[arg(long, value_name = "LOG2", default_value = "27",
          value_parser = clap::value_parser!(u32).range(4..=31))]
    pub raw_size_log2: u32,
}

/// Arguments for the lower-bound benchmark
#[derive(Parser, Debug, Clone)]
pub struct LowerBoundArgs {
    /// Largest element count in the sweep (element counts double from 8)
    #[arg(value_name = "MAX_ELEMENTS")]
    pub max_elements: usize,

    /// Trials averaged per configuration
    #[arg(short, long, default_value = "10")]
    pub trials: usize,

    /// Backing array length as a power of two (elements up to 64 bytes wide
    /// are generated at this length, so keep memory in mind)
    #[arg(long, value_name = "LOG2", default_value = "25",
          value_parser = clap::value_parser!(u32).range(4..=31))]
    pub raw_size_log2: u32,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated tables on stdout
    Human,
    /// JSON output
    Json,
}
