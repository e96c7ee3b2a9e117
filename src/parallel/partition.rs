//! Contiguous range partitioning of an array across workers

use std::ops::Range;

/// Number of workers that will actually run for an array of `len` elements.
///
/// Requests larger than the element count are clamped so that no worker is
/// left without an element. Returns 0 only for an empty array.
pub fn effective_workers(len: usize, requested: usize) -> usize {
    std::cmp::min(requested, len)
}

/// Split `[0, len)` into contiguous, non-overlapping ranges, one per worker.
///
/// Every range has `len / workers` elements except the last, which absorbs
/// the remainder of the division. The ranges are returned in index order and
/// always cover `[0, len)` exactly.
///
/// # Algorithm
/// ```text
/// k    = min(workers, len)
/// base = len / k
/// range(i) = [i * base, i * base + base)   for i in 0..k-1
/// range(k-1) = [(k-1) * base, len)
/// ```
///
/// An empty array yields no ranges. `workers` must be at least 1; with a
/// zero worker count nothing is produced.
///
/// # Example
/// ```rust
/// use parsum::parallel::partition;
///
/// let ranges = partition(10, 4);
/// assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..10]);
/// ```
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    let count = effective_workers(len, workers);
    if count == 0 {
        return Vec::new();
    }

    let base_size = len / count;
    let ranges: Vec<Range<usize>> = (0..count)
        .map(|index| {
            let start = index * base_size;
            // Last worker handles remaining elements
            let end = if index == count - 1 {
                len
            } else {
                start + base_size
            };
            start..end
        })
        .collect();

    tracing::debug!(
        "Partitioned {} elements into {} ranges (base size {})",
        len,
        ranges.len(),
        base_size
    );

    ranges
}
