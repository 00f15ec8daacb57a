//! Text normalization and morphological analysis.

pub mod lemmatizer;
pub mod morph;
pub mod normalizer;

pub use lemmatizer::Lemmatizer;
pub use morph::{DictMorph, MorphAnalyzer};
pub use normalizer::Normalizer;
