//! Core types shared across the profiling pipeline.

use serde::{Deserialize, Serialize};

/// Default traversal depth for the common-hypernym search.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Default size of the vocabulary slice fed into the pairwise hypernym
/// search. The search is quadratic in this number.
pub const DEFAULT_VOCAB_LIMIT: usize = 50;

/// Part-of-speech categories reported by the morphological analyzer
/// (OpenCorpora-style tag set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    AdjFull,
    AdjShort,
    Comparative,
    Verb,
    Infinitive,
    ParticipleFull,
    ParticipleShort,
    Gerund,
    Numeral,
    Adverb,
    Pronoun,
    Predicative,
    Preposition,
    Conjunction,
    Particle,
    Interjection,
    Unknown,
}

impl PosTag {
    /// Parse an OpenCorpora-style tag name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let pos = match tag {
            "NOUN" => Self::Noun,
            "ADJF" => Self::AdjFull,
            "ADJS" => Self::AdjShort,
            "COMP" => Self::Comparative,
            "VERB" => Self::Verb,
            "INFN" => Self::Infinitive,
            "PRTF" => Self::ParticipleFull,
            "PRTS" => Self::ParticipleShort,
            "GRND" => Self::Gerund,
            "NUMR" => Self::Numeral,
            "ADVB" => Self::Adverb,
            "NPRO" => Self::Pronoun,
            "PRED" => Self::Predicative,
            "PREP" => Self::Preposition,
            "CONJ" => Self::Conjunction,
            "PRCL" => Self::Particle,
            "INTJ" => Self::Interjection,
            "UNKN" => Self::Unknown,
            _ => return None,
        };
        Some(pos)
    }

    /// Returns the tag name used in lexicon files and log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::AdjFull => "ADJF",
            Self::AdjShort => "ADJS",
            Self::Comparative => "COMP",
            Self::Verb => "VERB",
            Self::Infinitive => "INFN",
            Self::ParticipleFull => "PRTF",
            Self::ParticipleShort => "PRTS",
            Self::Gerund => "GRND",
            Self::Numeral => "NUMR",
            Self::Adverb => "ADVB",
            Self::Pronoun => "NPRO",
            Self::Predicative => "PRED",
            Self::Preposition => "PREP",
            Self::Conjunction => "CONJ",
            Self::Particle => "PRCL",
            Self::Interjection => "INTJ",
            Self::Unknown => "UNKN",
        }
    }

    /// Whether this category passes the content-word filter: nouns, full
    /// and short adjectives, finite verbs, infinitives, adverbs.
    pub fn is_content_word(&self) -> bool {
        matches!(
            self,
            Self::Noun
                | Self::AdjFull
                | Self::AdjShort
                | Self::Verb
                | Self::Infinitive
                | Self::Adverb
        )
    }
}

/// One candidate reading of a word: its dictionary form plus grammatical
/// category. Analyzers return these ranked, best reading first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Dictionary (base) form, lowercase.
    pub normal_form: String,
    /// Grammatical category of this reading.
    pub pos: PosTag,
    /// Set for Latin-script tokens, which bypass the POS filter.
    pub latin: bool,
}

impl Analysis {
    /// Create a reading with the given base form and category.
    pub fn new(normal_form: impl Into<String>, pos: PosTag) -> Self {
        Self {
            normal_form: normal_form.into(),
            pos,
            latin: false,
        }
    }

    /// Create a Latin-script reading; the word itself (lowercased) is the
    /// base form.
    pub fn latin(word: impl Into<String>) -> Self {
        Self {
            normal_form: word.into().to_lowercase(),
            pos: PosTag::Unknown,
            latin: true,
        }
    }
}

/// Tuning knobs for [`crate::pipeline::TableProfiler`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Maximum traversal depth for the common-hypernym search.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// How many top-ranked lemmas of a column feed the pairwise hypernym
    /// search. Keeps the quadratic pair space bounded.
    #[serde(default = "default_vocab_limit")]
    pub hypernym_vocab_limit: usize,

    /// Use only the first sense of each word when forming pairs. Trades
    /// recall on secondary senses for a smaller pair space.
    #[serde(default = "default_first_sense")]
    pub first_sense_only: bool,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_vocab_limit() -> usize {
    DEFAULT_VOCAB_LIMIT
}

fn default_first_sense() -> bool {
    true
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            hypernym_vocab_limit: DEFAULT_VOCAB_LIMIT,
            first_sense_only: true,
        }
    }
}

impl ProfilerConfig {
    /// Set the hypernym search depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the vocabulary slice size for the hypernym search.
    pub fn with_hypernym_vocab_limit(mut self, limit: usize) -> Self {
        self.hypernym_vocab_limit = limit;
        self
    }

    /// Toggle first-sense-only pairing.
    pub fn with_first_sense_only(mut self, first_sense_only: bool) -> Self {
        self.first_sense_only = first_sense_only;
        self
    }
}
