//! Choosing which subnets end up in the table.
//!
//! A table shows the first and last `num_results` subnets, or every subnet
//! when `num_results` is [`ALL_RESULTS`].

use std::ops::Range;

/// `num_results` value that selects every subnet.
pub const ALL_RESULTS: i64 = -1;

/// Number of leading and trailing subnets shown when not told otherwise.
pub const DEFAULT_NUM_RESULTS: i64 = 10;

/// Selected indices in ascending order, each once.
///
/// Only the head and tail are visited, so a plan with billions of subnets
/// and a short table stays cheap.
pub fn selected_indices(actual_subnets: u64, num_results: i64) -> SelectedIndices {
    let (head, tail) = if num_results == ALL_RESULTS {
        (0..actual_subnets, actual_subnets..actual_subnets)
    } else if num_results <= 0 {
        (0..0, 0..0)
    } else {
        let n = num_results as u64;
        let head_end = n.min(actual_subnets);
        let tail_start = actual_subnets.saturating_sub(n).max(head_end);
        (0..head_end, tail_start..actual_subnets)
    };
    SelectedIndices { head, tail }
}

/// Iterator returned by [`selected_indices`].
#[derive(Debug, Clone)]
pub struct SelectedIndices {
    head: Range<u64>,
    tail: Range<u64>,
}

impl Iterator for SelectedIndices {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.head.next().or_else(|| self.tail.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Row rule applied to one index at a time.
    fn is_selected(index: u64, actual_subnets: u64, num_results: i64) -> bool {
        let index = index as i128;
        let n = num_results as i128;
        num_results == ALL_RESULTS || index < n || index >= actual_subnets as i128 - n
    }

    fn brute_force(actual_subnets: u64, num_results: i64) -> Vec<u64> {
        (0..actual_subnets)
            .filter(|i| is_selected(*i, actual_subnets, num_results))
            .collect()
    }

    #[test]
    fn test_selected_matches_predicate() {
        for actual in [1u64, 2, 8, 10, 11, 20, 21, 32, 64] {
            for n in [-3i64, -1, 0, 1, 2, 5, 10, 11, 40] {
                let fast: Vec<u64> = selected_indices(actual, n).collect();
                assert_eq!(fast, brute_force(actual, n), "actual={actual} n={n}");
            }
        }
    }

    #[test]
    fn test_head_and_tail() {
        let picked: Vec<u64> = selected_indices(64, 2).collect();
        assert_eq!(picked, vec![0, 1, 62, 63]);
    }

    #[test]
    fn test_overlap_is_not_duplicated() {
        let picked: Vec<u64> = selected_indices(12, 10).collect();
        assert_eq!(picked, (0..12).collect::<Vec<u64>>());
    }

    #[test]
    fn test_all_results() {
        assert_eq!(selected_indices(5, ALL_RESULTS).count(), 5);
        assert!(is_selected(3, 64, ALL_RESULTS));
    }

    #[test]
    fn test_non_positive_selects_nothing() {
        assert_eq!(selected_indices(64, 0).count(), 0);
        assert_eq!(selected_indices(64, -2).count(), 0);
        assert!(!is_selected(0, 64, -2));
        assert!(!is_selected(63, 64, 0));
    }

    #[test]
    fn test_huge_plan() {
        let picked: Vec<u64> = selected_indices(1 << 32, 1).collect();
        assert_eq!(picked, vec![0, (1 << 32) - 1]);
    }
}
