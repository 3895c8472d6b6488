use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from normalized word to occurrence count.
///
/// Keys are lowercase, stripped of leading/trailing ASCII punctuation, and
/// never empty. Counts only ever increase; a table is mutated by addition
/// and never decremented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountTable {
    counts: HashMap<String, u64>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` occurrences of `word`, starting from zero if unseen.
    pub fn add(&mut self, word: &str, n: u64) {
        *self.counts.entry(word.to_string()).or_insert(0) += n;
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Frequency values only, one per distinct word. Order is arbitrary but
    /// stable for the lifetime of the table.
    pub fn frequencies(&self) -> Vec<u64> {
        self.counts.values().copied().collect()
    }

    /// Entries sorted by descending count, ties broken alphabetically so
    /// serialized output is deterministic.
    pub fn most_common(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(w, &c)| (w.clone(), c))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

/// One row of a rank table: a frequency and the rank shared by every word
/// observed at that frequency. Ties carry the maximum ordinal position of
/// their tie block under descending sort ("max" tie rule).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub frequency: u64,
    pub rank: f64,
}

/// Result of a maximum-likelihood power-law fit.
///
/// `beta` is the internal parameter found by the bounded search; `alpha`
/// is the exponent reported to callers, `alpha = 1 / (beta - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLawFit {
    pub alpha: f64,
    pub beta: f64,
}

/// Everything the transform stage hands to the load stage.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub counts_csv: String,
    pub rank_table: Vec<RankedEntry>,
    pub fit: Option<PowerLawFit>,
    pub curve: Vec<(f64, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_from_zero() {
        let mut table = CountTable::new();
        table.add("the", 2);
        table.add("the", 3);
        table.add("of", 1);
        assert_eq!(table.get("the"), 5);
        assert_eq!(table.get("of"), 1);
        assert_eq!(table.get("unseen"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_most_common_orders_by_count_then_word() {
        let mut table = CountTable::new();
        table.add("banana", 2);
        table.add("apple", 2);
        table.add("cherry", 5);
        let rows = table.most_common();
        assert_eq!(
            rows,
            vec![
                ("cherry".to_string(), 5),
                ("apple".to_string(), 2),
                ("banana".to_string(), 2),
            ]
        );
    }
}
