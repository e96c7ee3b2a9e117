//! # parsum - parallel array reduction
//!
//! parsum sums an integer array by splitting it into contiguous ranges,
//! summing every range on its own thread, and merging the partial sums with
//! one of two synchronization styles:
//!
//! - **Channel**: each worker sends its partial sum over a channel buffered
//!   to the worker count; the caller receives exactly one value per worker.
//! - **Shared counter**: each worker adds its partial sum into a
//!   mutex-guarded total and signals a wait-group; the caller reads the total
//!   once every worker has signalled.
//!
//! Both are checked against, and timed relative to, a sequential baseline.
//!
//! ## Library Usage
//!
//! ```rust
//! use parsum::{reduce_concurrent_channel, reduce_concurrent_shared_counter, reduce_sequential};
//!
//! let data: Vec<i64> = (1..=10).collect();
//!
//! assert_eq!(reduce_sequential(&data), 55);
//! assert_eq!(reduce_concurrent_channel(&data, 4)?, 55);
//! assert_eq!(reduce_concurrent_shared_counter(&data, 4)?, 55);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Command Line
//!
//! ```bash
//! # Check every strategy against the baseline
//! parsum verify
//!
//! # Benchmark with 5 timed trials per measurement
//! parsum bench --size 10000000 --workers 2,4,8 --trials 5
//!
//! # Sum a few values with the shared-counter combiner
//! parsum sum --strategy shared-counter --workers 3 1 2 3 4 5
//! ```

pub mod bench;
pub mod cli;
pub mod config;
pub mod parallel;

pub use cli::{Cli, Output};
pub use config::ParsumConfig;
pub use parallel::{
    Strategy, partition, reduce_concurrent_channel, reduce_concurrent_shared_counter,
    reduce_sequential,
};

/// Result type alias for parsum operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
