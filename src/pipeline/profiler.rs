//! Pipeline runner — orchestrates per-column profiling.
//!
//! [`TableProfiler`] holds the injected services (morphological analyzer,
//! optional semantic graph) and threads every column through
//! normalize → lemmatize → count, then derives the hypernym table from
//! the truncated top of the frequency ranking.

use log::debug;

use crate::freq::WordCounter;
use crate::nlp::{Lemmatizer, MorphAnalyzer, Normalizer};
use crate::semantic::{HypernymAggregator, SemanticLookup};
use crate::table::{Profile, ProfiledColumn, Table};
use crate::types::ProfilerConfig;

/// Profiles every column of a table.
///
/// Services are passed in, never owned globally, so the profiler is
/// testable against fake analyzers and graphs.
pub struct TableProfiler<'a> {
    morph: &'a dyn MorphAnalyzer,
    semantic: Option<&'a dyn SemanticLookup>,
    normalizer: Normalizer,
    config: ProfilerConfig,
}

impl<'a> TableProfiler<'a> {
    /// Create a profiler over a morphological analyzer. Without a
    /// semantic graph no hypernym tables are derived.
    pub fn new(morph: &'a dyn MorphAnalyzer) -> Self {
        Self {
            morph,
            semantic: None,
            normalizer: Normalizer::new(),
            config: ProfilerConfig::default(),
        }
    }

    /// Attach a semantic graph; enables the hypernym tables.
    pub fn with_semantic(mut self, graph: &'a dyn SemanticLookup) -> Self {
        self.semantic = Some(graph);
        self
    }

    /// Replace the default normalizer.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the default configuration.
    pub fn with_config(mut self, config: ProfilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Profile every column of the table, in source order.
    pub fn profile(&self, table: &Table) -> Profile {
        let lemmatizer = Lemmatizer::new(self.morph);
        let mut columns = Vec::with_capacity(table.len());

        for column in table.columns() {
            let mut counter = WordCounter::new();
            for cell in &column.cells {
                let words = self.normalizer.split_by_words(cell);
                counter.update(lemmatizer.lemmatize(&words));
            }
            let frequencies = counter.snapshot();
            debug!(
                "column {:?}: {} cells, {} distinct lemmas",
                column.name,
                column.cells.len(),
                frequencies.len()
            );

            let hypernyms = self.semantic.map(|graph| {
                // The pair search is quadratic; feed it only the top of
                // the ranking.
                let vocab: Vec<&str> = frequencies
                    .iter()
                    .take(self.config.hypernym_vocab_limit)
                    .map(|(lemma, _)| lemma.as_str())
                    .collect();
                HypernymAggregator::new(graph)
                    .with_max_depth(self.config.max_depth)
                    .with_first_sense_only(self.config.first_sense_only)
                    .aggregate(&vocab)
            });

            columns.push(ProfiledColumn {
                name: column.name.clone(),
                cell_count: column.cells.len(),
                frequencies,
                hypernyms,
            });
        }

        Profile { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::DictMorph;
    use crate::semantic::Wordnet;
    use crate::table::Column;

    const LEXICON: &str = "\
кот\tкот\tNOUN
кошка\tкошка\tNOUN
собака\tсобака\tNOUN
сидит\tсидеть\tVERB
спит\tспать\tVERB
в\tв\tPREP
доме\tдом\tNOUN
";

    const SYNSETS: &str = "\
s1\tживотное
s2\tкот,кошка\ts1
s3\tсобака\ts1
";

    fn morph() -> DictMorph {
        DictMorph::from_reader(LEXICON.as_bytes()).unwrap()
    }

    #[test]
    fn test_frequency_ranking_end_to_end() {
        let morph = morph();
        let table = Table::from_columns(vec![Column::new(
            "ответ",
            vec!["кот сидит".into(), "кот спит".into()],
        )]);

        let profile = TableProfiler::new(&morph).profile(&table);
        let column = &profile.columns[0];

        assert_eq!(column.name, "ответ");
        assert_eq!(column.cell_count, 2);
        assert_eq!(column.frequencies[0], ("кот".to_string(), 2));
        assert_eq!(column.frequencies.len(), 3);
        let total: u32 = column.frequencies.iter().map(|(_, count)| count).sum();
        assert_eq!(total, 4);
        assert!(column.hypernyms.is_none());
    }

    #[test]
    fn test_function_words_excluded_from_profile() {
        let morph = morph();
        let table = Table::from_columns(vec![Column::new("q", vec!["кот в доме".into()])]);

        let profile = TableProfiler::new(&morph).profile(&table);
        let lemmas: Vec<&str> = profile.columns[0]
            .frequencies
            .iter()
            .map(|(lemma, _)| lemma.as_str())
            .collect();

        assert!(lemmas.contains(&"кот"));
        assert!(lemmas.contains(&"дом"));
        assert!(!lemmas.contains(&"в"));
    }

    #[test]
    fn test_hypernym_table_derived_from_vocabulary() {
        let morph = morph();
        let graph = Wordnet::from_reader(SYNSETS.as_bytes()).unwrap();
        let table = Table::from_columns(vec![Column::new(
            "q",
            vec!["кот сидит".into(), "собака спит".into()],
        )]);

        let profile = TableProfiler::new(&morph).with_semantic(&graph).profile(&table);
        let hypernyms = profile.columns[0].hypernyms.as_ref().unwrap();
        assert_eq!(hypernyms, &vec![("животное".to_string(), 1)]);
    }

    #[test]
    fn test_vocabulary_truncation_bounds_pair_search() {
        let morph = morph();
        let graph = Wordnet::from_reader(SYNSETS.as_bytes()).unwrap();
        // "кот" appears twice and outranks "собака"; with a one-lemma
        // vocabulary there are no pairs.
        let table = Table::from_columns(vec![Column::new(
            "q",
            vec!["кот".into(), "кот собака".into()],
        )]);

        let config = ProfilerConfig::default().with_hypernym_vocab_limit(1);
        let profile = TableProfiler::new(&morph)
            .with_semantic(&graph)
            .with_config(config)
            .profile(&table);

        let hypernyms = profile.columns[0].hypernyms.as_ref().unwrap();
        assert!(hypernyms.is_empty());
    }

    #[test]
    fn test_columns_profiled_independently_in_order() {
        let morph = morph();
        let table = Table::from_columns(vec![
            Column::new("первый", vec!["кот".into()]),
            Column::new("второй", vec!["собака".into(), "собака".into()]),
            Column::new("пустой", vec![]),
        ]);

        let profile = TableProfiler::new(&morph).profile(&table);
        assert_eq!(profile.columns.len(), 3);
        assert_eq!(profile.columns[0].name, "первый");
        assert_eq!(profile.columns[1].frequencies[0], ("собака".to_string(), 2));
        assert_eq!(profile.columns[2].cell_count, 0);
        assert!(profile.columns[2].frequencies.is_empty());
    }

    #[test]
    fn test_duplicates_within_cell_count_once() {
        let morph = morph();
        let table = Table::from_columns(vec![Column::new("q", vec!["кот кот кот".into()])]);

        let profile = TableProfiler::new(&morph).profile(&table);
        assert_eq!(profile.columns[0].frequencies, vec![("кот".to_string(), 1)]);
    }
}
