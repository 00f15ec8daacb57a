//! Cell-text normalization
//!
//! Splits a raw answer cell into a set of cleaned word tokens: punctuation
//! is stripped from chunk edges, typographic marks are removed, and the
//! diaeresis variant `ё` collapses to `е` so keyboard-input inconsistency
//! does not split the vocabulary.

use rustc_hash::FxHashSet;

/// Characters stripped from chunk edges by default (ASCII punctuation).
const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Typographic marks removed wherever they appear in a chunk.
const TYPOGRAPHIC_MARKS: [char; 3] = ['«', '»', '…'];

/// Splits cell text into distinct cleaned tokens.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Characters stripped from token edges.
    punctuation: FxHashSet<char>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the default ASCII punctuation set.
    pub fn new() -> Self {
        Self {
            punctuation: ASCII_PUNCTUATION.chars().collect(),
        }
    }

    /// Create a normalizer stripping a custom set of characters.
    pub fn with_punctuation(chars: &str) -> Self {
        Self {
            punctuation: chars.chars().collect(),
        }
    }

    /// Split a cell into its set of cleaned tokens.
    ///
    /// Duplicates within the cell collapse; tokens that clean down to an
    /// empty string are dropped so they never reach the morphological
    /// analyzer.
    pub fn split_by_words(&self, text: &str) -> FxHashSet<String> {
        let mut words = FxHashSet::default();
        for chunk in text.split_whitespace() {
            let word = self.clean_word(chunk);
            if !word.is_empty() {
                words.insert(word);
            }
        }
        words
    }

    fn clean_word(&self, chunk: &str) -> String {
        let unmarked: String = chunk
            .chars()
            .filter(|c| !TYPOGRAPHIC_MARKS.contains(c))
            .collect();
        let trimmed = unmarked.trim_matches(|c: char| self.punctuation.contains(&c));
        trimmed
            .chars()
            .map(|c| match c {
                'ё' => 'е',
                'Ё' => 'Е',
                c => c,
            })
            .collect()
    }
}
