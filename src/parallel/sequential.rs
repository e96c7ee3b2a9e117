//! Single-threaded baseline reducer

/// Sum the whole array in index order on the calling thread.
///
/// This is the correctness oracle every concurrent combiner is checked
/// against, and the timing baseline for speedup ratios.
pub fn reduce_sequential(data: &[i64]) -> i64 {
    let mut sum = 0;
    for value in data {
        sum += *value;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_sum() {
        let data: Vec<i64> = (1..=10).collect();
        assert_eq!(reduce_sequential(&data), 55);
    }

    #[test]
    fn test_sequential_empty() {
        assert_eq!(reduce_sequential(&[]), 0);
    }

    #[test]
    fn test_sequential_matches_iterator_sum() {
        let data: Vec<i64> = (-500..1_000).collect();
        assert_eq!(reduce_sequential(&data), data.iter().sum::<i64>());
    }
}
