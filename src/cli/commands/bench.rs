//! Bench command implementation
//!
//! Times the sequential baseline and both concurrent combiners on `1..=size`,
//! then prints per-strategy timing and speedup against the baseline.

use crate::bench::{self, BenchReport, Measurement};
use crate::cli::Output;
use crate::config::ParsumConfig;
use anyhow::{Result, bail};
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug, Clone, Default)]
pub struct BenchArgs {
    /// Number of elements in the benchmark array
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Worker counts to benchmark (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',')]
    pub workers: Vec<usize>,

    /// Timed runs per measurement
    #[arg(short, long)]
    pub trials: Option<usize>,

    /// Untimed runs before timing starts
    #[arg(long)]
    pub warmup: Option<usize>,
}

/// Execute the bench command
pub fn execute(args: BenchArgs, config: &ParsumConfig, output: &Output) -> Result<()> {
    let settings = config.settings()?.bench;

    let size = args.size.unwrap_or(settings.size);
    let mut plan = settings.plan();
    if !args.workers.is_empty() {
        plan.workers = args.workers;
    }
    if let Some(trials) = args.trials {
        plan.trials = trials;
    }
    if let Some(warmup) = args.warmup {
        plan.warmup = warmup;
    }

    output.header("Parallel reduction benchmark");
    output.key_value("Array size:", &format!("{size} elements"), false);
    output.key_value("Worker counts:", &format!("{:?}", plan.workers), false);
    output.key_value(
        "Trials:",
        &format!("{} timed, {} warmup", plan.trials, plan.warmup),
        false,
    );

    if plan.workers.iter().any(|&w| w > size) {
        output.warning("Worker counts above the array size are clamped to it");
    }

    let data = bench::generate_dataset(size);
    let report = bench::run(&data, &plan)?;

    print_report(&report, output);

    if !report.all_match() {
        bail!("concurrent totals do not match the sequential baseline");
    }
    Ok(())
}

fn print_report(report: &BenchReport, output: &Output) {
    output.category("Timings (median / min / max)");
    print_measurement(&report.baseline, output);
    for run in &report.runs {
        print_measurement(run, output);
    }

    output.category("Verification");
    for run in &report.runs {
        output.check(
            &run.label(),
            &format!("total {}", run.total),
            run.total == report.baseline.total,
        );
    }

    output.category("Speedup compared to sequential");
    for (label, ratio) in report.speedups() {
        output.key_value(&format!("{label}:"), &format!("{ratio:.2}x"), ratio > 1.0);
    }
    output.blank_line();
}

fn print_measurement(measurement: &Measurement, output: &Output) {
    output.key_value(
        &format!("{}:", measurement.label()),
        &format!(
            "{} / {} / {}  (total {})",
            format_duration(measurement.median()),
            format_duration(measurement.min()),
            format_duration(measurement.max()),
            measurement.total
        ),
        false,
    );
}

fn format_duration(duration: Duration) -> String {
    format!("{:.3}ms", duration.as_secs_f64() * 1_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(1_500)), "1.500ms");
        assert_eq!(format_duration(Duration::ZERO), "0.000ms");
    }
}
