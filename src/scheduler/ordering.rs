/*!
 * Ordering Strategies
 * Execution-order permutations for the non-preemptive strategies
 *
 * Each strategy comes in two forms: a permutation of submission indices
 * (so process identity survives reordering) and a reordered copy of the
 * burst times. Neither form touches the caller's slice.
 */

use crate::core::errors::{ArgResult, InvalidArgument};
use crate::core::types::{Priority, Time};

/// Submission order: `[0, 1, .., n-1]`
pub fn arrival_permutation(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Indices sorted by ascending burst time, ties by submission index
pub fn burst_permutation(bursts: &[Time]) -> Vec<usize> {
    let mut order = arrival_permutation(bursts.len());
    // stable sort keeps equal bursts in submission order
    order.sort_by(|&a, &b| bursts[a].total_cmp(&bursts[b]));
    order
}

/// Indices sorted by ascending priority value, ties by submission index
pub fn priority_permutation(bursts: &[Time], priorities: &[Priority]) -> ArgResult<Vec<usize>> {
    if priorities.len() != bursts.len() {
        return Err(InvalidArgument::PriorityLengthMismatch {
            expected: bursts.len(),
            actual: priorities.len(),
        });
    }

    let mut order = arrival_permutation(bursts.len());
    order.sort_by_key(|&i| priorities[i]);
    Ok(order)
}

/// Gather `values` in the order given by `permutation`
pub fn apply_permutation<T: Copy>(values: &[T], permutation: &[usize]) -> Vec<T> {
    permutation.iter().map(|&i| values[i]).collect()
}

/// FCFS: burst times in submission order
pub fn identity_order(bursts: &[Time]) -> Vec<Time> {
    bursts.to_vec()
}

/// SJF: burst times ascending
pub fn by_ascending_burst_time(bursts: &[Time]) -> Vec<Time> {
    apply_permutation(bursts, &burst_permutation(bursts))
}

/// Priority: burst times reordered so the smallest priority value runs first
pub fn by_ascending_priority(bursts: &[Time], priorities: &[Priority]) -> ArgResult<Vec<Time>> {
    let order = priority_permutation(bursts, priorities)?;
    Ok(apply_permutation(bursts, &order))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_order_copies() {
        let bursts = [5.0, 1.0, 3.0];
        assert_eq!(identity_order(&bursts), vec![5.0, 1.0, 3.0]);
    }

    #[test]
    fn test_burst_order_is_stable() {
        let bursts = [6.0, 8.0, 3.0, 6.0];
        assert_eq!(burst_permutation(&bursts), vec![2, 0, 3, 1]);
        assert_eq!(by_ascending_burst_time(&bursts), vec![3.0, 6.0, 6.0, 8.0]);
        // caller data untouched
        assert_eq!(bursts, [6.0, 8.0, 3.0, 6.0]);
    }

    #[test]
    fn test_priority_order() {
        let bursts = [10.0, 1.0, 2.0, 1.0, 5.0];
        let priorities = [3, 1, 4, 5, 2];
        assert_eq!(
            priority_permutation(&bursts, &priorities).unwrap(),
            vec![1, 4, 0, 2, 3]
        );
        assert_eq!(
            by_ascending_priority(&bursts, &priorities).unwrap(),
            vec![1.0, 5.0, 10.0, 2.0, 1.0]
        );
    }

    #[test]
    fn test_priority_ties_keep_submission_order() {
        let bursts = [4.0, 2.0, 9.0];
        let priorities = [1, 0, 1];
        assert_eq!(
            priority_permutation(&bursts, &priorities).unwrap(),
            vec![1, 0, 2]
        );
    }

    #[test]
    fn test_priority_length_mismatch() {
        let err = by_ascending_priority(&[1.0, 2.0, 3.0], &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::PriorityLengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_empty_sequences() {
        assert!(by_ascending_burst_time(&[]).is_empty());
        assert!(by_ascending_priority(&[], &[]).unwrap().is_empty());
    }
}
