use super::channel::reduce_concurrent_channel;
use super::sequential::reduce_sequential;
use super::shared::reduce_concurrent_shared_counter;
use anyhow::Result;
use std::fmt;
use std::str::FromStr;

/// Reduction strategy for choosing between the sequential baseline and the
/// two concurrent combiners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Single pass on the calling thread
    Sequential,
    /// Workers send partial sums over a buffered channel
    Channel,
    /// Workers add into a mutex-guarded total, joined by a wait-group
    SharedCounter,
}

impl Strategy {
    /// Every strategy, baseline first
    pub fn all() -> [Strategy; 3] {
        [
            Strategy::Sequential,
            Strategy::Channel,
            Strategy::SharedCounter,
        ]
    }

    /// The concurrent strategies only
    pub fn concurrent() -> [Strategy; 2] {
        [Strategy::Channel, Strategy::SharedCounter]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Channel => "channel",
            Strategy::SharedCounter => "shared-counter",
        }
    }

    /// Reduce `data` with this strategy. `workers` is ignored by the
    /// sequential baseline.
    pub fn reduce(&self, data: &[i64], workers: usize) -> Result<i64> {
        match self {
            Strategy::Sequential => Ok(reduce_sequential(data)),
            Strategy::Channel => reduce_concurrent_channel(data, workers),
            Strategy::SharedCounter => reduce_concurrent_shared_counter(data, workers),
        }
    }

    /// Calculate the default worker count from available CPU cores and
    /// configuration limits
    ///
    /// # Parameters
    /// - `max_threads_config`: User-specified maximum threads (0 = no limit)
    /// - `thread_percentage`: Percentage of CPU cores to utilize (e.g., 75 for 75%)
    ///
    /// # Algorithm
    /// ```text
    /// 1. Detect available CPU cores: num_cpus::get()
    /// 2. Apply percentage: cores * thread_percentage / 100
    /// 3. Ensure minimum: max(1, result)
    /// 4. Apply config limit: min(max_threads_config, result) if max_threads_config > 0
    /// ```
    ///
    /// # Examples
    /// ```rust
    /// use parsum::parallel::Strategy;
    ///
    /// let workers = Strategy::calculate_optimal_workers(0, 75);
    /// assert!(workers >= 1);
    ///
    /// let workers = Strategy::calculate_optimal_workers(2, 100);
    /// assert!(workers <= 2);
    /// ```
    pub fn calculate_optimal_workers(max_threads_config: usize, thread_percentage: u8) -> usize {
        let available_cores = num_cpus::get();

        let workers_by_percentage =
            std::cmp::max(1, (available_cores * thread_percentage as usize) / 100);

        if max_threads_config > 0 {
            std::cmp::min(max_threads_config, workers_by_percentage)
        } else {
            workers_by_percentage
        }
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        <Strategy as clap::ValueEnum>::from_str(s, true)
            .map_err(|_| anyhow::anyhow!("unknown strategy '{s}'"))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
