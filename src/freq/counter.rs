//! Incremental frequency counting
//!
//! [`WordCounter`] accumulates lemma occurrences cell by cell (or in one
//! bulk call — both accumulate identically) and produces ranked
//! snapshots on demand.

use rustc_hash::FxHashMap;

/// Frequency counter with an explicit `update`/`snapshot` contract.
///
/// Ranking ties keep first-insertion order. That order is observable in
/// the output but implementation-defined; callers must not rely on a
/// particular tie order beyond its stability within a run.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    counts: FxHashMap<String, u32>,
    /// Lemmas in first-encounter order, for stable tie-breaking.
    order: Vec<String>,
}

impl WordCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one batch of lemmas.
    pub fn update<I>(&mut self, lemmas: I)
    where
        I: IntoIterator<Item = String>,
    {
        for lemma in lemmas {
            match self.counts.get_mut(&lemma) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(lemma.clone(), 1);
                    self.order.push(lemma);
                }
            }
        }
    }

    /// Ranked `(lemma, count)` pairs, highest count first.
    ///
    /// Idempotent: snapshotting twice without an intervening `update`
    /// yields identical output.
    pub fn snapshot(&self) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .order
            .iter()
            .map(|lemma| (lemma.clone(), self.counts[lemma]))
            .collect();
        // Stable sort: ties keep insertion order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Total number of accumulated occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&count| u64::from(count)).sum()
    }

    /// Number of distinct lemmas seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_counts_sum_to_occurrences() {
        let mut counter = WordCounter::new();
        counter.update(batch(&["кот", "дом", "кот"]));
        counter.update(batch(&["кот", "сад"]));

        assert_eq!(counter.total(), 5);
        let snapshot = counter.snapshot();
        let sum: u64 = snapshot.iter().map(|(_, c)| u64::from(*c)).sum();
        assert_eq!(sum, 5);
    }

    #[test]
    fn test_snapshot_sorted_non_increasing() {
        let mut counter = WordCounter::new();
        counter.update(batch(&["a", "b", "b", "c", "c", "c"]));

        let snapshot = counter.snapshot();
        assert_eq!(snapshot[0], ("c".to_string(), 3));
        for window in snapshot.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut counter = WordCounter::new();
        counter.update(batch(&["второй", "первый", "второй", "первый", "хвост"]));

        let snapshot = counter.snapshot();
        assert_eq!(
            snapshot,
            vec![
                ("второй".to_string(), 2),
                ("первый".to_string(), 2),
                ("хвост".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut counter = WordCounter::new();
        counter.update(batch(&["a", "b", "a"]));

        assert_eq!(counter.snapshot(), counter.snapshot());
    }

    #[test]
    fn test_streamed_equals_batched() {
        let mut streamed = WordCounter::new();
        streamed.update(batch(&["кот", "дом"]));
        streamed.update(batch(&["кот"]));
        streamed.update(batch(&["сад", "дом", "кот"]));

        let mut batched = WordCounter::new();
        batched.update(batch(&["кот", "дом", "кот", "сад", "дом", "кот"]));

        assert_eq!(streamed.snapshot(), batched.snapshot());
    }

    #[test]
    fn test_empty_counter() {
        let counter = WordCounter::new();
        assert!(counter.is_empty());
        assert_eq!(counter.len(), 0);
        assert_eq!(counter.total(), 0);
        assert!(counter.snapshot().is_empty());
    }
}
