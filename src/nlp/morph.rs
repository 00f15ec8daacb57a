//! Morphological analysis seam
//!
//! [`MorphAnalyzer`] is the boundary to whatever produces ranked word
//! readings; the pipeline only ever consumes the trait. [`DictMorph`] is
//! the bundled implementation, backed by a TSV lexicon.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::{ProfileError, Result};
use crate::types::{Analysis, PosTag};

/// Ranked morphological analysis of single words.
pub trait MorphAnalyzer {
    /// Candidate readings for a word, best first. Empty when the analyzer
    /// has nothing for the word.
    fn parse(&self, word: &str) -> Vec<Analysis>;
}

/// Lexicon-backed analyzer.
///
/// Reads `form<TAB>lemma<TAB>TAG` lines (`#` comments and blank lines are
/// skipped). Multiple lines for the same surface form keep file order, so
/// the first line is the preferred reading. Lookup is case-insensitive.
/// ASCII-alphabetic words missing from the lexicon are reported as
/// Latin-script tokens; other unknown words yield no reading.
#[derive(Debug, Default)]
pub struct DictMorph {
    entries: FxHashMap<String, Vec<Analysis>>,
}

impl DictMorph {
    /// Load a lexicon file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a lexicon from any buffered reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut entries: FxHashMap<String, Vec<Analysis>> = FxHashMap::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let (form, lemma, tag) = match (fields.next(), fields.next(), fields.next()) {
                (Some(form), Some(lemma), Some(tag)) if !form.is_empty() && !lemma.is_empty() => {
                    (form, lemma, tag)
                }
                _ => {
                    return Err(ProfileError::Lexicon {
                        line: idx + 1,
                        reason: "expected form<TAB>lemma<TAB>tag".into(),
                    })
                }
            };

            let pos = PosTag::from_tag(tag).ok_or_else(|| ProfileError::Lexicon {
                line: idx + 1,
                reason: format!("unknown tag `{tag}`"),
            })?;

            entries
                .entry(form.to_lowercase())
                .or_default()
                .push(Analysis::new(lemma.to_lowercase(), pos));
        }

        Ok(Self { entries })
    }

    /// Number of distinct surface forms in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon holds no forms at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MorphAnalyzer for DictMorph {
    fn parse(&self, word: &str) -> Vec<Analysis> {
        let key = word.to_lowercase();
        if let Some(readings) = self.entries.get(&key) {
            return readings.clone();
        }
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
            return vec![Analysis::latin(key)];
        }
        Vec::new()
    }
}
