//! Pairwise hypernym aggregation
//!
//! For the top lemmas of a column, finds every unordered pair sharing a
//! semantic ancestor within a bounded depth and tallies, per ancestor
//! term, the number of distinct pairs it covers. The pair space is
//! quadratic in the input size; callers keep the input to a truncated
//! vocabulary slice.

use log::debug;
use rustc_hash::FxHashSet;

use super::{SemanticLookup, SenseId};
use crate::freq::WordCounter;
use crate::types::DEFAULT_MAX_DEPTH;

/// Aggregates shared-ancestor counts over word pairs.
pub struct HypernymAggregator<'a> {
    graph: &'a dyn SemanticLookup,
    max_depth: usize,
    first_sense_only: bool,
}

impl<'a> HypernymAggregator<'a> {
    /// Create an aggregator over the given semantic graph.
    pub fn new(graph: &'a dyn SemanticLookup) -> Self {
        Self {
            graph,
            max_depth: DEFAULT_MAX_DEPTH,
            first_sense_only: true,
        }
    }

    /// Set the ancestor search depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Toggle first-sense-only pairing.
    pub fn with_first_sense_only(mut self, first_sense_only: bool) -> Self {
        self.first_sense_only = first_sense_only;
        self
    }

    /// Count, for every ancestor term, the distinct word pairs it covers.
    ///
    /// Words without senses contribute no pairs. Each pair contributes at
    /// most one count per ancestor term, no matter how many paths or
    /// ancestor synsets expose that term. Output is ranked highest count
    /// first, ties in encounter order.
    pub fn aggregate<S: AsRef<str>>(&self, words: &[S]) -> Vec<(String, u32)> {
        let mut entries: Vec<(&str, SenseId)> = Vec::new();
        for word in words {
            let word = word.as_ref();
            let senses = self.graph.senses(word);
            if self.first_sense_only {
                if let Some(&first) = senses.first() {
                    entries.push((word, first));
                }
            } else {
                entries.extend(senses.into_iter().map(|sense| (word, sense)));
            }
        }

        let mut counter = WordCounter::new();
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let (word_a, sense_a) = entries[i];
                let (word_b, sense_b) = entries[j];
                if word_a == word_b {
                    // All-senses mode: a word never pairs with itself.
                    continue;
                }

                let common = self.graph.common_hypernyms(sense_a, sense_b, self.max_depth);
                if common.is_empty() {
                    continue;
                }

                let mut terms: FxHashSet<String> = FxHashSet::default();
                for hit in &common {
                    let lemmas = self.graph.lemmas(hit.sense);
                    debug!(
                        "{word_a:?} x {word_b:?}: {lemmas:?} at {}",
                        hit.dist_a + hit.dist_b
                    );
                    terms.extend(lemmas.iter().cloned());
                }
                counter.update(terms);
            }
        }

        counter.snapshot()
    }
}
