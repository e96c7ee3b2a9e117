//! Shared-counter combiner: a mutex-guarded total plus a completion barrier

use super::partition::partition;
use super::worker::sum_range;
use anyhow::{Result, anyhow, ensure};
use crossbeam::sync::WaitGroup;
use std::sync::{Mutex, PoisonError};

/// Reduce `data` with `workers` threads that add into one shared total.
///
/// Each worker sums its range locally, then takes the lock only long enough
/// to add its partial sum. An add that overflows i64 clears the total, which
/// the caller reports as an error once every worker is done. Every worker holds a clone of a [`WaitGroup`];
/// the caller reads the total once all clones have been dropped.
///
/// Returns `Ok(0)` for an empty array without spawning anything. A worker
/// count of zero is rejected.
///
/// ```rust
/// use parsum::reduce_concurrent_shared_counter;
///
/// let data: Vec<i64> = (1..=10).collect();
/// assert_eq!(reduce_concurrent_shared_counter(&data, 4)?, 55);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn reduce_concurrent_shared_counter(data: &[i64], workers: usize) -> Result<i64> {
    ensure!(workers >= 1, "worker count must be at least 1");
    if data.is_empty() {
        return Ok(0);
    }

    let ranges = partition(data.len(), workers);
    let worker_count = ranges.len();
    let total = Mutex::new(Some(0_i64));
    let wait_group = WaitGroup::new();

    crossbeam::thread::scope(|s| -> Result<i64> {
        for (worker_id, range) in ranges.into_iter().enumerate() {
            let wait_group = wait_group.clone();
            let total = &total;
            s.spawn(move |_| {
                tracing::trace!("worker-{} summing [{}, {})", worker_id, range.start, range.end);
                let partial = sum_range(data, range);
                add_partial(total, partial);
                drop(wait_group);
            });
        }

        // Blocks until every worker has dropped its handle
        wait_group.wait();
        tracing::debug!("All {} workers signalled completion", worker_count);

        read_total(&total)
    })
    .map_err(|_| anyhow!("Thread panic occurred during shared-counter reduction"))?
}

/// Add one partial sum under the lock. The critical section is the add only.
fn add_partial(total: &Mutex<Option<i64>>, partial: i64) {
    let mut guard = total.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = (*guard).and_then(|sum| sum.checked_add(partial));
}

/// Read the combined total once all workers have signalled
fn read_total(total: &Mutex<Option<i64>>) -> Result<i64> {
    let sum = *total
        .lock()
        .map_err(|_| anyhow!("shared total poisoned by a panicking worker"))?;
    sum.ok_or_else(|| anyhow!("partial sums overflow i64"))
}
