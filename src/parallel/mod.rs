//! Parallel reduction of an integer array
//!
//! This module splits an array into contiguous ranges, sums each range on its
//! own thread, and merges the partial sums with one of two synchronization
//! styles.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────────────┐
//! │  Partitioner │───▶│   Workers    │───▶│        Combiner          │
//! │              │    │              │    │                          │
//! │ • K = min(W, │    │ • one range  │    │ • channel: K receives    │
//! │   len)       │    │   each       │    │ • shared counter: mutex  │
//! │ • last range │    │ • local sum  │    │   add + wait-group       │
//! │   takes rest │    │              │    │                          │
//! └──────────────┘    └──────────────┘    └──────────────────────────┘
//! ```
//!
//! Every reduction is a one-shot fan-out/fan-in:
//! Idle → Partitioned → Computing → Combined → Done. Nothing survives the call.
//!
//! Workers run on scoped threads and borrow the caller's slice directly, so
//! the array is never copied or moved into an `Arc`.
//!
//! # Example Usage
//!
//! ```rust
//! use parsum::parallel::{Strategy, reduce_sequential};
//!
//! let data: Vec<i64> = (1..=1_000).collect();
//! let expected = reduce_sequential(&data);
//!
//! for strategy in Strategy::concurrent() {
//!     assert_eq!(strategy.reduce(&data, 8)?, expected);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod channel;
pub mod partition;
pub mod sequential;
pub mod shared;
pub mod strategy;
pub mod worker;

// Re-export main types for easier access
pub use channel::reduce_concurrent_channel;
pub use partition::{effective_workers, partition};
pub use sequential::reduce_sequential;
pub use shared::reduce_concurrent_shared_counter;
pub use strategy::Strategy;
pub use worker::sum_range;
