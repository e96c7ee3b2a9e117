//! Configuration management for parsum
//!
//! Settings are loaded with figment from the embedded defaults, optional
//! user and repository files (TOML, JSON or YAML) and `PARSUM_` environment
//! variables, then extracted into the typed structs below.

use crate::bench::BenchPlan;
use crate::parallel::Strategy;
use serde::{Deserialize, Serialize};

pub mod core;

pub use self::core::ParsumConfig;

/// Top-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub reduce: ReduceSettings,
    pub bench: BenchSettings,
}

/// Worker sizing for one-off reductions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReduceSettings {
    /// Fixed worker count (0 = derive from CPU cores)
    pub workers: usize,
    /// Percentage of CPU cores to use when deriving
    pub thread_percentage: u8,
    /// Cap on the derived worker count (0 = no cap)
    pub max_threads: usize,
}

impl ReduceSettings {
    pub fn resolved_workers(&self) -> usize {
        if self.workers > 0 {
            self.workers
        } else {
            Strategy::calculate_optimal_workers(self.max_threads, self.thread_percentage)
        }
    }
}

/// Benchmark defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchSettings {
    pub size: usize,
    pub workers: Vec<usize>,
    pub trials: usize,
    pub warmup: usize,
}

impl BenchSettings {
    pub fn plan(&self) -> BenchPlan {
        BenchPlan {
            workers: self.workers.clone(),
            trials: self.trials,
            warmup: self.warmup,
        }
    }
}
