//! Lemma frequency aggregation.

pub mod counter;

pub use counter::WordCounter;
