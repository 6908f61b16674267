use crate::error::{ProcessingError, Result};

/// Returns the value that would sit at zero-based rank `k` if `values`
/// were sorted ascending, without fully sorting.
///
/// Quickselect with the first element as pivot. The remaining elements are
/// partitioned into values strictly below the pivot and everything else,
/// so duplicates of the pivot always land in the high partition; that rule
/// decides which of several equal values is returned and must not change.
/// Worst case is quadratic on already-sorted input; the iterative loop
/// keeps the stack flat regardless.
pub fn select(values: &[i32], k: usize) -> Result<i32> {
    if values.is_empty() {
        return Err(ProcessingError::InvalidArgument(
            "cannot select from an empty sequence".to_string(),
        ));
    }
    if k >= values.len() {
        return Err(ProcessingError::InvalidArgument(format!(
            "rank {} is out of bounds for {} values",
            k,
            values.len()
        )));
    }

    let mut values = values.to_vec();
    let mut k = k;

    loop {
        if values.len() == 1 {
            return Ok(values[0]);
        }

        let pivot = values[0];
        let (low, high): (Vec<i32>, Vec<i32>) =
            values[1..].iter().copied().partition(|&v| v < pivot);

        if low.len() == k {
            return Ok(pivot);
        }

        if low.len() > k {
            values = low;
        } else {
            k -= low.len() + 1;
            values = high;
        }
    }
}

/// Median by the upper-median convention: the element at rank `n / 2`
/// (floor division), so an even-length sequence yields the upper of the two
/// central values rather than their average.
pub fn median(values: &[i32]) -> Result<i32> {
    select(values, values.len() / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_matches_full_sort() {
        let samples: Vec<Vec<i32>> = vec![
            vec![7],
            vec![3, 1],
            vec![5, 2, 9, 1, 7],
            vec![4, 4, 2, 8, 4, 1],
            vec![-3, 0, -7, 12, 0],
            vec![10, 9, 8, 7, 6, 5],
        ];

        for values in samples {
            let mut sorted = values.clone();
            sorted.sort();

            for k in 0..values.len() {
                assert_eq!(
                    select(&values, k).unwrap(),
                    sorted[k],
                    "values={:?} k={}",
                    values,
                    k
                );
            }
        }
    }

    #[test]
    fn test_duplicates_route_to_high_partition() {
        for k in 0..3 {
            assert_eq!(select(&[5, 5, 5], k).unwrap(), 5);
        }
    }

    #[test]
    fn test_upper_median_convention() {
        assert_eq!(median(&[1, 2, 3, 4]).unwrap(), 3);
        assert_eq!(median(&[1, 2, 3]).unwrap(), 2);
        assert_eq!(median(&[9]).unwrap(), 9);
    }

    #[test]
    fn test_out_of_range_rank_is_rejected() {
        assert!(matches!(
            select(&[1, 2, 3], 3),
            Err(ProcessingError::InvalidArgument(_))
        ));
        assert!(matches!(
            select(&[], 0),
            Err(ProcessingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sorted_input_does_not_overflow_stack() {
        // Worst-case pivot choice: every pass strips a single element.
        let values: Vec<i32> = (0..10_000).collect();
        assert_eq!(select(&values, 5_000).unwrap(), 5_000);
    }
}
