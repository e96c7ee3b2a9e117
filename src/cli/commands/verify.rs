//! Verify command implementation
//!
//! Runs the fixed correctness scenarios plus a generated array per worker
//! count, and fails if any strategy disagrees with the sequential baseline.

use crate::bench::generate_dataset;
use crate::cli::Output;
use crate::parallel::{Strategy, effective_workers, partition, reduce_sequential};
use anyhow::{Result, bail};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Worker counts for the generated-array checks (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',', default_values_t = vec![1, 2, 4, 8])]
    pub workers: Vec<usize>,

    /// Length of the generated array
    #[arg(long, default_value_t = 100_000)]
    pub size: usize,
}

/// One named expectation about a reduction
struct Check {
    label: String,
    detail: String,
    passed: bool,
}

impl Check {
    fn expect(label: String, got: Result<i64>, expected: i64) -> Self {
        match got {
            Ok(total) => Check {
                label,
                detail: format!("got {total}, expected {expected}"),
                passed: total == expected,
            },
            Err(e) => Check {
                label,
                detail: format!("error: {e}"),
                passed: false,
            },
        }
    }
}

/// Execute the verify command
pub fn execute(args: VerifyArgs, output: &Output) -> Result<()> {
    output.header("Correctness checks");

    let mut checks = scenario_checks();
    checks.extend(generated_checks(&args.workers, args.size));

    for check in &checks {
        output.check(&check.label, &check.detail, check.passed);
    }

    let failed = checks.iter().filter(|c| !c.passed).count();
    output.blank_line();
    if failed > 0 {
        output.error(&format!("{} of {} checks failed", failed, checks.len()));
        bail!("{} of {} checks failed", failed, checks.len());
    }

    output.success(&format!("All {} checks passed", checks.len()));
    Ok(())
}

/// The fixed scenarios every strategy must satisfy
fn scenario_checks() -> Vec<Check> {
    let small: Vec<i64> = (1..=10).collect();
    let single = [42_i64];
    let clamp = [3_i64, 1, 4];
    let mut checks = Vec::new();

    for strategy in Strategy::all() {
        checks.push(Check::expect(
            format!("{strategy}: 1..=10 with 4 workers"),
            strategy.reduce(&small, 4),
            55,
        ));
        checks.push(Check::expect(
            format!("{strategy}: 1..=10 with 1 worker"),
            strategy.reduce(&small, 1),
            55,
        ));
        checks.push(Check::expect(
            format!("{strategy}: [42] with 4 workers"),
            strategy.reduce(&single, 4),
            42,
        ));
        checks.push(Check::expect(
            format!("{strategy}: empty array"),
            strategy.reduce(&[], 4),
            0,
        ));
    }

    for strategy in Strategy::concurrent() {
        let expected = strategy.reduce(&clamp, clamp.len()).unwrap_or(i64::MIN);
        checks.push(Check::expect(
            format!("{strategy}: 10 workers on 3 elements"),
            strategy.reduce(&clamp, 10),
            expected,
        ));
    }

    checks
}

/// Generated-array checks: agreement, idempotence and exact partition cover
fn generated_checks(workers: &[usize], size: usize) -> Vec<Check> {
    let data = generate_dataset(size);
    let expected = reduce_sequential(&data);
    let mut checks = Vec::new();

    for &count in workers {
        let ranges = partition(data.len(), count);
        let covered = ranges.windows(2).all(|pair| pair[0].end == pair[1].start)
            && ranges.first().map_or(0, |r| r.start) == 0
            && ranges.last().map_or(0, |r| r.end) == data.len()
            && ranges.len() == effective_workers(data.len(), count);
        checks.push(Check {
            label: format!("partition: {} elements, {} workers", data.len(), count),
            detail: format!("{} ranges", ranges.len()),
            passed: covered,
        });

        for strategy in Strategy::concurrent() {
            checks.push(Check::expect(
                format!("{strategy}: 1..={size} with {count} workers"),
                strategy.reduce(&data, count),
                expected,
            ));
            checks.push(Check::expect(
                format!("{strategy}: repeat with {count} workers"),
                strategy.reduce(&data, count),
                expected,
            ));
        }
    }

    checks
}
