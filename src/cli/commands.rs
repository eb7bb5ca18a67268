//! Command implementations for the Coldfind CLI.

use crate::bench::sweep::{SweepConfig, find_sweep, lower_bound_sweep};
use crate::bench::table::WidthReport;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::element::{WideKey16, WideKey32, WideKey64};
use crate::error::Result;
use crate::search::{
    linear_scan, quaternary_lower_bound, std_find, std_lower_bound, vector_scan_u32,
    vector_scan_u64, vector_scan_unrolled_u32,
};

/// Execute a CLI command.
pub fn execute_command(args: ColdfindArgs) -> Result<()> {
    match &args.command {
        Command::Find(find_args) => run_find(find_args.clone(), &args),
        Command::LowerBound(lb_args) => run_lower_bound(lb_args.clone(), &args),
    }
}

/// Benchmark the linear-scan strategies.
fn run_find(args: FindArgs, cli_args: &ColdfindArgs) -> Result<()> {
    let config = SweepConfig::new(args.max_elements)
        .with_trials(args.trials)
        .with_raw_size(1usize << args.raw_size_log2);
    config.validate()?;

    progress(cli_args, "sweeping std_find");
    let mut std_report = WidthReport::new();
    std_report.insert(width_of::<u32>(), find_sweep::<u32, _>(&config, std_find)?);
    std_report.insert(width_of::<u64>(), find_sweep::<u64, _>(&config, std_find)?);

    progress(cli_args, "sweeping linear_scan");
    let mut scalar_report = WidthReport::new();
    scalar_report.insert(
        width_of::<u32>(),
        find_sweep::<u32, _>(&config, linear_scan)?,
    );
    scalar_report.insert(
        width_of::<u64>(),
        find_sweep::<u64, _>(&config, linear_scan)?,
    );

    progress(cli_args, "sweeping vector_scan");
    let mut vector_report = WidthReport::new();
    vector_report.insert(
        width_of::<u32>(),
        find_sweep::<u32, _>(&config, vector_scan_u32)?,
    );
    vector_report.insert(
        width_of::<u64>(),
        find_sweep::<u64, _>(&config, vector_scan_u64)?,
    );

    // The 4x unroll only exists for the 32-bit width.
    progress(cli_args, "sweeping vector_scan_unrolled");
    let mut unrolled_report = WidthReport::new();
    unrolled_report.insert(
        width_of::<u32>(),
        find_sweep::<u32, _>(&config, vector_scan_unrolled_u32)?,
    );

    let mut std_u32_report = WidthReport::new();
    if let Some(table) = std_report.get(width_of::<u32>()) {
        std_u32_report.insert(width_of::<u32>(), table.clone());
    }

    let comparisons = vec![
        ComparisonReport {
            baseline: "std_find".to_string(),
            contender: "linear_scan".to_string(),
            ratios: std_report.compare(&scalar_report)?,
        },
        ComparisonReport {
            baseline: "std_find".to_string(),
            contender: "vector_scan".to_string(),
            ratios: std_report.compare(&vector_report)?,
        },
        ComparisonReport {
            baseline: "std_find".to_string(),
            contender: "vector_scan_unrolled".to_string(),
            ratios: std_u32_report.compare(&unrolled_report)?,
        },
    ];

    let strategies = vec![
        StrategyReport {
            strategy: "std_find".to_string(),
            report: std_report,
        },
        StrategyReport {
            strategy: "linear_scan".to_string(),
            report: scalar_report,
        },
        StrategyReport {
            strategy: "vector_scan".to_string(),
            report: vector_report,
        },
        StrategyReport {
            strategy: "vector_scan_unrolled".to_string(),
            report: unrolled_report,
        },
    ];

    BenchmarkOutput::new(strategies, comparisons).emit(cli_args)
}

/// Run one lower-bound strategy through every element width. The strategy is
/// a generic function item, so a macro stamps out one instantiation per type.
macro_rules! sweep_widths {
    ($config:expr, $search:expr) => {{
        let mut report = WidthReport::new();
        report.insert(
            width_of::<u32>(),
            lower_bound_sweep::<u32, _>($config, $search)?,
        );
        report.insert(
            width_of::<u64>(),
            lower_bound_sweep::<u64, _>($config, $search)?,
        );
        report.insert(
            width_of::<WideKey16>(),
            lower_bound_sweep::<WideKey16, _>($config, $search)?,
        );
        report.insert(
            width_of::<WideKey32>(),
            lower_bound_sweep::<WideKey32, _>($config, $search)?,
        );
        report.insert(
            width_of::<WideKey64>(),
            lower_bound_sweep::<WideKey64, _>($config, $search)?,
        );
        report
    }};
}

/// Benchmark the lower-bound strategies.
fn run_lower_bound(args: LowerBoundArgs, cli_args: &ColdfindArgs) -> Result<()> {
    let config = SweepConfig::new(args.max_elements)
        .with_trials(args.trials)
        .with_raw_size(1usize << args.raw_size_log2);
    config.validate()?;

    progress(cli_args, "sweeping std_lower_bound");
    let std_report = sweep_widths!(&config, std_lower_bound);

    progress(cli_args, "sweeping quaternary_lower_bound");
    let quaternary_report = sweep_widths!(&config, quaternary_lower_bound);

    let comparisons = vec![ComparisonReport {
        baseline: "std_lower_bound".to_string(),
        contender: "quaternary_lower_bound".to_string(),
        ratios: std_report.compare(&quaternary_report)?,
    }];

    let strategies = vec![
        StrategyReport {
            strategy: "std_lower_bound".to_string(),
            report: std_report,
        },
        StrategyReport {
            strategy: "quaternary_lower_bound".to_string(),
            report: quaternary_report,
        },
    ];

    BenchmarkOutput::new(strategies, comparisons).emit(cli_args)
}

fn width_of<T>() -> usize {
    std::mem::size_of::<T>()
}

fn progress(cli_args: &ColdfindArgs, message: &str) {
    if cli_args.verbosity() > 0 {
        eprintln!("{message}");
    }
}
