//! Channel-based combiner: every worker publishes one partial sum

use super::partition::partition;
use super::worker::sum_range;
use anyhow::{Result, anyhow, ensure};
use crossbeam::channel::{Receiver, Sender, bounded};

/// Reduce `data` with `workers` threads that report through a result channel.
///
/// The channel is buffered to the number of effective workers, so no worker
/// ever blocks on send. Each worker sends exactly one partial sum and exits;
/// the caller receives exactly that many values, in completion order.
///
/// Returns `Ok(0)` for an empty array without spawning anything. A worker
/// count of zero is rejected.
///
/// ```rust
/// use parsum::reduce_concurrent_channel;
///
/// let data: Vec<i64> = (1..=10).collect();
/// assert_eq!(reduce_concurrent_channel(&data, 4)?, 55);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn reduce_concurrent_channel(data: &[i64], workers: usize) -> Result<i64> {
    ensure!(workers >= 1, "worker count must be at least 1");
    if data.is_empty() {
        return Ok(0);
    }

    let ranges = partition(data.len(), workers);
    let worker_count = ranges.len();
    let (result_tx, result_rx): (Sender<i64>, Receiver<i64>) = bounded(worker_count);

    // Use crossbeam::thread::scope so workers can borrow the caller's slice
    crossbeam::thread::scope(|s| -> Result<i64> {
        for (worker_id, range) in ranges.into_iter().enumerate() {
            let result_tx = result_tx.clone();
            s.spawn(move |_| {
                tracing::trace!("worker-{} summing [{}, {})", worker_id, range.start, range.end);
                let partial = sum_range(data, range);
                if result_tx.send(partial).is_err() {
                    tracing::warn!("worker-{}: result receiver dropped", worker_id);
                }
            });
        }

        // Drop the original sender so a dead worker closes the channel
        drop(result_tx);

        collect_partials(&result_rx, worker_count)
    })
    .map_err(|_| anyhow!("Thread panic occurred during channel reduction"))?
}

/// Receive exactly `expected` partial sums and add them up.
fn collect_partials(result_rx: &Receiver<i64>, expected: usize) -> Result<i64> {
    let mut total = 0;
    for received in 0..expected {
        let partial = result_rx.recv().map_err(|_| {
            anyhow!("result channel closed after {received} of {expected} partial sums")
        })?;
        total = checked_total(total, partial)?;
    }

    tracing::debug!("Combined {} partial sums from channel", expected);
    Ok(total)
}

/// Add one partial sum to the running total, reporting i64 overflow as an error
pub(crate) fn checked_total(total: i64, partial: i64) -> Result<i64> {
    total
        .checked_add(partial)
        .ok_or_else(|| anyhow!("partial sums overflow i64"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::sequential::reduce_sequential;

    #[test]
    fn test_channel_small_array() {
        let data: Vec<i64> = (1..=10).collect();
        assert_eq!(reduce_concurrent_channel(&data, 4).unwrap(), 55);
        assert_eq!(reduce_concurrent_channel(&data, 1).unwrap(), 55);
    }

    #[test]
    fn test_channel_empty_array() {
        assert_eq!(reduce_concurrent_channel(&[], 1).unwrap(), 0);
        assert_eq!(reduce_concurrent_channel(&[], 16).unwrap(), 0);
    }

    #[test]
    fn test_channel_clamps_workers() {
        assert_eq!(reduce_concurrent_channel(&[42], 4).unwrap(), 42);
        let data = [3, 1, 4];
        assert_eq!(
            reduce_concurrent_channel(&data, 100).unwrap(),
            reduce_concurrent_channel(&data, 3).unwrap()
        );
    }

    #[test]
    fn test_channel_rejects_zero_workers() {
        let err = reduce_concurrent_channel(&[1, 2, 3], 0).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_channel_matches_sequential() {
        let data: Vec<i64> = (0..10_007).map(|i| (i * 37) % 101 - 50).collect();
        let expected = reduce_sequential(&data);
        for workers in [1, 2, 3, 7, 8, 64] {
            assert_eq!(reduce_concurrent_channel(&data, workers).unwrap(), expected);
        }
    }

    #[test]
    fn test_collect_partials_reports_short_channel() {
        let (tx, rx) = bounded(2);
        tx.send(5).unwrap();
        drop(tx);
        let err = collect_partials(&rx, 2).unwrap_err();
        assert!(err.to_string().contains("1 of 2"));
    }

    #[test]
    fn test_combine_overflow_is_an_error() {
        // Each worker holds one element, so only the combine step overflows
        let err = reduce_concurrent_channel(&[i64::MAX, 1], 2).unwrap_err();
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn test_checked_total() {
        assert_eq!(checked_total(40, 2).unwrap(), 42);
        assert!(checked_total(i64::MIN, -1).is_err());
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_worker_panic_becomes_error() {
        // A single worker overflows inside sum_range and panics
        let err = reduce_concurrent_channel(&[i64::MAX, 1], 1).unwrap_err();
        assert!(err.to_string().contains("Thread panic"));
    }
}
