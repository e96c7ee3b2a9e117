//! Multi-trial timing of the reduction strategies
//!
//! A single wall-clock sample is too noisy to compare strategies, so every
//! measurement here runs a configurable number of untimed warmup passes
//! followed by timed trials, and reports the median.

use crate::parallel::Strategy;
use anyhow::{Result, ensure};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// What to benchmark and how many times
#[derive(Debug, Clone)]
pub struct BenchPlan {
    /// Worker counts to run each concurrent strategy with
    pub workers: Vec<usize>,
    /// Timed runs per measurement
    pub trials: usize,
    /// Untimed runs before the timed ones
    pub warmup: usize,
}

/// Timings for one strategy at one worker count
#[derive(Debug, Clone)]
pub struct Measurement {
    pub strategy: Strategy,
    /// Worker count requested (1 for the sequential baseline)
    pub workers: usize,
    /// Total produced by every trial
    pub total: i64,
    pub samples: Vec<Duration>,
}

impl Measurement {
    pub fn label(&self) -> String {
        match self.strategy {
            Strategy::Sequential => "sequential".to_string(),
            strategy => format!("{} ({} workers)", strategy, self.workers),
        }
    }

    pub fn median(&self) -> Duration {
        median(&self.samples)
    }

    pub fn min(&self) -> Duration {
        self.samples.iter().min().copied().unwrap_or_default()
    }

    pub fn max(&self) -> Duration {
        self.samples.iter().max().copied().unwrap_or_default()
    }
}

/// Baseline plus every concurrent measurement
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub size: usize,
    pub baseline: Measurement,
    pub runs: Vec<Measurement>,
}

impl BenchReport {
    /// True when every concurrent total equals the sequential total
    pub fn all_match(&self) -> bool {
        self.runs.iter().all(|run| run.total == self.baseline.total)
    }

    /// Speedup of each run over the baseline, by median
    pub fn speedups(&self) -> Vec<(String, f64)> {
        let baseline = self.baseline.median();
        self.runs
            .iter()
            .map(|run| (run.label(), speedup(baseline, run.median())))
            .collect()
    }
}

/// Median of a set of samples. Even counts average the two middle samples.
pub fn median(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }

    let mut sorted = samples.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2
    } else {
        sorted[mid]
    }
}

/// Ratio of baseline time to candidate time
pub fn speedup(baseline: Duration, candidate: Duration) -> f64 {
    if candidate.is_zero() {
        return if baseline.is_zero() { 1.0 } else { f64::INFINITY };
    }
    baseline.as_secs_f64() / candidate.as_secs_f64()
}

/// Build the benchmark input `1..=size`
pub fn generate_dataset(size: usize) -> Vec<i64> {
    (1..=size as i64).into_par_iter().collect()
}

/// Time `strategy` on `data`, checking that every trial returns the same total
pub fn measure(
    strategy: Strategy,
    data: &[i64],
    workers: usize,
    plan: &BenchPlan,
) -> Result<Measurement> {
    ensure!(plan.trials >= 1, "at least one timed trial is required");

    for _ in 0..plan.warmup {
        strategy.reduce(data, workers)?;
    }

    let mut samples = Vec::with_capacity(plan.trials);
    let mut total = None;
    for trial in 0..plan.trials {
        let start = Instant::now();
        let result = strategy.reduce(data, workers)?;
        samples.push(start.elapsed());

        match total {
            None => total = Some(result),
            Some(previous) => {
                ensure!(
                    previous == result,
                    "{} returned {} on trial {} but {} before",
                    strategy,
                    result,
                    trial + 1,
                    previous
                );
            }
        }
    }

    let measurement = Measurement {
        strategy,
        workers,
        total: total.unwrap_or_default(),
        samples,
    };
    tracing::info!(
        "{}: total {} median {:?}",
        measurement.label(),
        measurement.total,
        measurement.median()
    );
    Ok(measurement)
}

/// Benchmark the baseline and every concurrent strategy at every worker count
pub fn run(data: &[i64], plan: &BenchPlan) -> Result<BenchReport> {
    ensure!(!plan.workers.is_empty(), "no worker counts to benchmark");
    ensure!(
        plan.workers.iter().all(|&w| w >= 1),
        "worker counts must be at least 1"
    );

    let baseline = measure(Strategy::Sequential, data, 1, plan)?;

    let mut runs = Vec::new();
    for strategy in Strategy::concurrent() {
        for &workers in &plan.workers {
            runs.push(measure(strategy, data, workers, plan)?);
        }
    }

    Ok(BenchReport {
        size: data.len(),
        baseline,
        runs,
    })
}
