//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::bench::table::{RatioReport, WidthReport};
use crate::cli::args::{ColdfindArgs, OutputFormat};
use crate::clock::time_unit;
use crate::error::Result;

/// One strategy's sweep results across element widths.
#[derive(Debug, Serialize, Deserialize)]
pub struct StrategyReport {
    pub strategy: String,
    pub report: WidthReport,
}

/// Ratio of a baseline strategy's times to a contender's.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub baseline: String,
    pub contender: String,
    pub ratios: RatioReport,
}

/// Full output of one benchmark command.
#[derive(Debug, Serialize, Deserialize)]
pub struct BenchmarkOutput {
    pub time_unit: String,
    pub strategies: Vec<StrategyReport>,
    pub comparisons: Vec<ComparisonReport>,
}

impl BenchmarkOutput {
    pub fn new(strategies: Vec<StrategyReport>, comparisons: Vec<ComparisonReport>) -> Self {
        BenchmarkOutput {
            time_unit: time_unit().to_string(),
            strategies,
            comparisons,
        }
    }

    /// Write the output in the format selected on the command line.
    pub fn emit(&self, cli_args: &ColdfindArgs) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match cli_args.output_format {
            OutputFormat::Human => self.write_human(&mut out),
            OutputFormat::Json => {
                if cli_args.pretty {
                    serde_json::to_writer_pretty(&mut out, self)?;
                } else {
                    serde_json::to_writer(&mut out, self)?;
                }
                writeln!(out)?;
                Ok(())
            }
        }
    }

    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "times in {}", self.time_unit)?;
        writeln!(out)?;
        for entry in &self.strategies {
            writeln!(out, "{}", entry.strategy)?;
            entry.report.write_csv(out)?;
        }
        for comparison in &self.comparisons {
            writeln!(out, "{} / {}", comparison.baseline, comparison.contender)?;
            comparison.ratios.write_csv(out)?;
        }
        Ok(())
    }
}
