//! Ranked word-frequency and shared-hypernym profiles for the free-text
//! columns of a survey CSV.
//!
//! Every answer cell is normalized into a set of cleaned tokens,
//! lemmatized through a morphological analyzer with a content-word
//! filter, and accumulated into a per-column frequency ranking. With a
//! semantic graph attached, the top of each ranking is additionally
//! searched pairwise for shared ancestors (hypernyms).
//!
//! Services enter through the [`nlp::MorphAnalyzer`] and
//! [`semantic::SemanticLookup`] traits; [`nlp::DictMorph`] and
//! [`semantic::Wordnet`] are the bundled TSV-backed implementations.
//!
//! ```
//! use lexprofile::nlp::DictMorph;
//! use lexprofile::pipeline::TableProfiler;
//! use lexprofile::table::{Column, Table};
//!
//! let lexicon = "кот\tкот\tNOUN\nспит\tспать\tVERB\n";
//! let morph = DictMorph::from_reader(lexicon.as_bytes()).unwrap();
//!
//! let table = Table::from_columns(vec![Column::new("вопрос", vec!["кот спит".into()])]);
//! let profile = TableProfiler::new(&morph).profile(&table);
//!
//! assert_eq!(profile.columns[0].frequencies.len(), 2);
//! ```

pub mod error;
pub mod freq;
pub mod nlp;
pub mod pipeline;
pub mod semantic;
pub mod table;
pub mod types;

pub use error::{ProfileError, Result};
pub use pipeline::TableProfiler;
pub use types::ProfilerConfig;
