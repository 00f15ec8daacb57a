//! POS-filtered lemmatization
//!
//! Maps cleaned tokens to their dictionary forms, keeping only content
//! words. The filter is intentional vocabulary curation, not an error
//! path: pronouns, particles, prepositions and the like are dropped
//! silently (visible at debug verbosity).

use log::debug;
use rustc_hash::FxHashSet;

use crate::nlp::morph::MorphAnalyzer;

/// Maps tokens to admitted dictionary forms via a morphological analyzer.
pub struct Lemmatizer<'a> {
    morph: &'a dyn MorphAnalyzer,
}

impl<'a> Lemmatizer<'a> {
    /// Create a lemmatizer over the given analyzer.
    pub fn new(morph: &'a dyn MorphAnalyzer) -> Self {
        Self { morph }
    }

    /// Lemmatize a token set.
    ///
    /// Only the highest-ranked reading of each token is considered; its
    /// base form is admitted when the reading is Latin-flagged or its
    /// category passes [`crate::types::PosTag::is_content_word`]. The
    /// output may be shorter than the input (rejected tokens) and may
    /// repeat (different tokens sharing a base form) — repeats are
    /// meaningful for counting.
    pub fn lemmatize(&self, words: &FxHashSet<String>) -> Vec<String> {
        let mut lemmas = Vec::with_capacity(words.len());
        for word in words {
            let Some(best) = self.morph.parse(word).into_iter().next() else {
                debug!("no reading for {word:?}, dropped");
                continue;
            };
            if best.latin || best.pos.is_content_word() {
                lemmas.push(best.normal_form);
            } else {
                debug!("dropped {word:?} ({})", best.pos.as_str());
            }
        }
        lemmas
    }
}
