//! Sum command implementation

use crate::cli::Output;
use crate::config::ParsumConfig;
use crate::parallel::{Strategy, effective_workers};
use anyhow::{Result, ensure};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SumArgs {
    /// Reduction strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Channel)]
    pub strategy: Strategy,

    /// Worker count (defaults to the configured or CPU-derived count)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Integers to sum
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Execute the sum command
pub fn execute(args: SumArgs, config: &ParsumConfig, output: &Output) -> Result<()> {
    let workers = match args.workers {
        Some(workers) => workers,
        None => config.settings()?.reduce.resolved_workers(),
    };
    ensure!(workers >= 1, "worker count must be at least 1");

    output.verbose(&format!(
        "{} over {} values with {} of {} requested workers",
        args.strategy,
        args.values.len(),
        effective_workers(args.values.len(), workers),
        workers
    ));

    let total = args.strategy.reduce(&args.values, workers)?;

    // The total is the command's result and is printed even when quiet
    println!("{total}");
    Ok(())
}
