//! Per-range summation run by every concurrent worker

use std::ops::Range;

/// Sum the elements of `data` inside `range`.
///
/// The accumulator is local to the call, so workers never read or write
/// shared state while summing. An empty range contributes 0.
pub fn sum_range(data: &[i64], range: Range<usize>) -> i64 {
    let mut sum = 0;
    for value in &data[range] {
        sum += *value;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_range() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(sum_range(&data, 0..5), 15);
        assert_eq!(sum_range(&data, 1..3), 5);
        assert_eq!(sum_range(&data, 4..5), 5);
    }

    #[test]
    fn test_empty_range_contributes_zero() {
        let data = [7, 8, 9];
        assert_eq!(sum_range(&data, 2..2), 0);
        assert_eq!(sum_range(&[], 0..0), 0);
    }

    #[test]
    fn test_negative_values() {
        let data = [-5, 3, -2, 10];
        assert_eq!(sum_range(&data, 0..4), 6);
        assert_eq!(sum_range(&data, 0..3), -4);
    }
}
