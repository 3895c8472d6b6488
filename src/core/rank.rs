use crate::domain::model::RankedEntry;

/// Assign ranks to a multiset of frequencies under the "max" tie rule.
///
/// Frequencies are sorted descending and ranked 1..N; every run of equal
/// values then shares the maximum ordinal position of the run, so
/// rank(v) = number of entries with frequency >= v. Different ranking
/// conventions exist (average, min, first, dense); this one is the "max"
/// rule and callers depend on it.
pub fn assign_ranks(frequencies: &[u64]) -> Vec<RankedEntry> {
    let mut sorted: Vec<u64> = frequencies.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let n = sorted.len();
    let mut entries = Vec::with_capacity(n);
    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && sorted[end + 1] == sorted[start] {
            end += 1;
        }
        let rank = (end + 1) as f64;
        for &frequency in &sorted[start..=end] {
            entries.push(RankedEntry { frequency, rank });
        }
        start = end + 1;
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(frequencies: &[u64]) -> Vec<f64> {
        assign_ranks(frequencies).iter().map(|e| e.rank).collect()
    }

    #[test]
    fn test_distinct_frequencies_get_ordinal_ranks() {
        assert_eq!(ranks(&[10, 5, 2]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ties_share_the_maximum_position() {
        // Both 5's occupy positions 1 and 2, so they share rank 2.
        assert_eq!(ranks(&[5, 5, 3]), vec![2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_tie_block_in_the_middle() {
        assert_eq!(ranks(&[9, 4, 4, 4, 1]), vec![1.0, 4.0, 4.0, 4.0, 5.0]);
    }

    #[test]
    fn test_all_equal_frequencies_share_rank_n() {
        assert_eq!(ranks(&[7, 7, 7, 7]), vec![4.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_invariant_under_input_permutation() {
        let a = assign_ranks(&[3, 5, 5, 1, 9]);
        let b = assign_ranks(&[9, 1, 5, 3, 5]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rank_never_decreases_as_frequency_drops() {
        let table = assign_ranks(&[12, 7, 7, 7, 3, 3, 1]);
        for pair in table.windows(2) {
            assert!(pair[0].frequency >= pair[1].frequency);
            assert!(pair[0].rank <= pair[1].rank);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(assign_ranks(&[]).is_empty());
    }
}
