//! Semantic-graph lookups and hypernym aggregation.

pub mod hypernyms;
pub mod wordnet;

pub use hypernyms::HypernymAggregator;
pub use wordnet::Wordnet;

/// Identifier of one sense (synset) within a semantic graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SenseId(pub u32);

/// An ancestor shared by two senses, with the distance from each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonHypernym {
    pub sense: SenseId,
    pub dist_a: usize,
    pub dist_b: usize,
}

/// Read-only lookup into a semantic graph.
pub trait SemanticLookup {
    /// Sense entries for a word, best first. Empty when the word is not
    /// in the graph.
    fn senses(&self, word: &str) -> Vec<SenseId>;

    /// Ancestors shared by `a` and `b`, each reachable within `max_depth`
    /// levels of its own side. A sense counts as its own ancestor at
    /// distance 0.
    fn common_hypernyms(&self, a: SenseId, b: SenseId, max_depth: usize) -> Vec<CommonHypernym>;

    /// Member lemmas of a sense. Empty for ids the graph does not know.
    fn lemmas(&self, sense: SenseId) -> &[String];
}
