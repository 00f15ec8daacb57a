//! TSV-backed synset graph
//!
//! One synset per line: `id<TAB>lemmas<TAB>parents`, lemmas and parents
//! comma-separated, the parents field empty or absent for roots. Ids are
//! opaque strings resolved in a second pass so forward references are
//! fine. `#` comments and blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;

use super::{CommonHypernym, SemanticLookup, SenseId};
use crate::error::{ProfileError, Result};

#[derive(Debug, Clone)]
struct Synset {
    lemmas: Vec<String>,
    parents: Vec<u32>,
}

/// In-memory semantic graph with a lemma → senses index.
///
/// Senses for a word keep the file order of their synsets, so the first
/// entry is the graph's preferred sense.
#[derive(Debug, Default)]
pub struct Wordnet {
    synsets: Vec<Synset>,
    sense_index: FxHashMap<String, Vec<SenseId>>,
}

impl Wordnet {
    /// Load a synset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load synsets from any buffered reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        struct RawSynset {
            lemmas: Vec<String>,
            parent_ids: Vec<String>,
            line: usize,
        }

        let mut raw: Vec<RawSynset> = Vec::new();
        let mut id_to_index: FxHashMap<String, u32> = FxHashMap::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let (id, lemmas) = match (fields.next(), fields.next()) {
                (Some(id), Some(lemmas)) if !id.is_empty() && !lemmas.is_empty() => (id, lemmas),
                _ => {
                    return Err(ProfileError::Wordnet {
                        line: idx + 1,
                        reason: "expected id<TAB>lemmas[<TAB>parents]".into(),
                    })
                }
            };

            if id_to_index.contains_key(id) {
                return Err(ProfileError::Wordnet {
                    line: idx + 1,
                    reason: format!("duplicate synset id `{id}`"),
                });
            }
            id_to_index.insert(id.to_string(), raw.len() as u32);

            let lemmas = lemmas
                .split(',')
                .map(|lemma| lemma.trim().to_lowercase())
                .filter(|lemma| !lemma.is_empty())
                .collect();
            let parent_ids = fields
                .next()
                .unwrap_or("")
                .split(',')
                .map(|parent| parent.trim().to_string())
                .filter(|parent| !parent.is_empty())
                .collect();

            raw.push(RawSynset {
                lemmas,
                parent_ids,
                line: idx + 1,
            });
        }

        let mut synsets = Vec::with_capacity(raw.len());
        let mut sense_index: FxHashMap<String, Vec<SenseId>> = FxHashMap::default();

        for (index, entry) in raw.into_iter().enumerate() {
            let mut parents = Vec::with_capacity(entry.parent_ids.len());
            for parent_id in &entry.parent_ids {
                let resolved =
                    id_to_index
                        .get(parent_id)
                        .copied()
                        .ok_or_else(|| ProfileError::Wordnet {
                            line: entry.line,
                            reason: format!("unknown parent id `{parent_id}`"),
                        })?;
                parents.push(resolved);
            }

            for lemma in &entry.lemmas {
                sense_index
                    .entry(lemma.clone())
                    .or_default()
                    .push(SenseId(index as u32));
            }

            synsets.push(Synset {
                lemmas: entry.lemmas,
                parents,
            });
        }

        Ok(Self {
            synsets,
            sense_index,
        })
    }

    /// Number of synsets in the graph.
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    /// Whether the graph holds no synsets.
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Ancestor closure of `start`, mapping synset index to minimal
    /// distance. Includes `start` itself at distance 0.
    fn ancestors(&self, start: SenseId, max_depth: usize) -> FxHashMap<u32, usize> {
        let mut dist: FxHashMap<u32, usize> = FxHashMap::default();
        if self.synsets.get(start.0 as usize).is_none() {
            return dist;
        }

        dist.insert(start.0, 0);
        let mut frontier = vec![start.0];
        let mut depth = 0;

        while !frontier.is_empty() && depth < max_depth {
            depth += 1;
            let mut next = Vec::new();
            for index in frontier {
                for &parent in &self.synsets[index as usize].parents {
                    if !dist.contains_key(&parent) {
                        dist.insert(parent, depth);
                        next.push(parent);
                    }
                }
            }
            frontier = next;
        }

        dist
    }
}

impl SemanticLookup for Wordnet {
    fn senses(&self, word: &str) -> Vec<SenseId> {
        self.sense_index
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn common_hypernyms(&self, a: SenseId, b: SenseId, max_depth: usize) -> Vec<CommonHypernym> {
        let from_a = self.ancestors(a, max_depth);
        let from_b = self.ancestors(b, max_depth);

        let mut common: Vec<CommonHypernym> = from_a
            .iter()
            .filter_map(|(&sense, &dist_a)| {
                from_b.get(&sense).map(|&dist_b| CommonHypernym {
                    sense: SenseId(sense),
                    dist_a,
                    dist_b,
                })
            })
            .collect();
        // Deterministic order: nearest ancestors first.
        common.sort_by_key(|hit| (hit.dist_a + hit.dist_b, hit.sense.0));
        common
    }

    fn lemmas(&self, sense: SenseId) -> &[String] {
        self.synsets
            .get(sense.0 as usize)
            .map(|synset| synset.lemmas.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
# id	lemmas	parents
s1\tсущество
s2\tживотное,зверь\ts1
s3\tкот,кошка\ts2
s4\tсобака\ts2
s5\tмышь\ts2
";

    fn graph() -> Wordnet {
        Wordnet::from_reader(FIXTURE.as_bytes()).unwrap()
    }

    fn sense(graph: &Wordnet, word: &str) -> SenseId {
        graph.senses(word)[0]
    }

    #[test]
    fn test_senses_lookup() {
        let graph = graph();
        assert_eq!(graph.len(), 5);
        assert_eq!(graph.senses("кот").len(), 1);
        assert_eq!(graph.senses("зверь"), graph.senses("животное"));
        assert!(graph.senses("нет-такого").is_empty());
    }

    #[test]
    fn test_senses_case_insensitive() {
        let graph = graph();
        assert_eq!(graph.senses("Кот"), graph.senses("кот"));
    }

    #[test]
    fn test_common_hypernyms_with_distances() {
        let graph = graph();
        let cat = sense(&graph, "кот");
        let dog = sense(&graph, "собака");

        let common = graph.common_hypernyms(cat, dog, 10);
        assert_eq!(common.len(), 2);
        assert_eq!(graph.lemmas(common[0].sense), ["животное", "зверь"]);
        assert_eq!((common[0].dist_a, common[0].dist_b), (1, 1));
        assert_eq!(graph.lemmas(common[1].sense), ["существо"]);
        assert_eq!((common[1].dist_a, common[1].dist_b), (2, 2));
    }

    #[test]
    fn test_depth_bound_honored() {
        let graph = graph();
        let cat = sense(&graph, "кот");
        let dog = sense(&graph, "собака");

        // Depth 1 reaches the shared parent but not the root.
        let common = graph.common_hypernyms(cat, dog, 1);
        assert_eq!(common.len(), 1);
        assert_eq!(graph.lemmas(common[0].sense), ["животное", "зверь"]);
    }

    #[test]
    fn test_zero_depth_matches_only_shared_senses() {
        let graph = graph();
        let cat = sense(&graph, "кот");
        let dog = sense(&graph, "собака");

        assert!(graph.common_hypernyms(cat, dog, 0).is_empty());

        let same = graph.common_hypernyms(cat, cat, 0);
        assert_eq!(same.len(), 1);
        assert_eq!((same[0].dist_a, same[0].dist_b), (0, 0));
    }

    #[test]
    fn test_diamond_paths_deduped_to_min_distance() {
        let diamond = "\
r\tвершина
m1\tсередина\tr
m2\tдругая\tr
leaf\tлист\tm1,m2
";
        let graph = Wordnet::from_reader(diamond.as_bytes()).unwrap();
        let leaf = sense(&graph, "лист");

        let common = graph.common_hypernyms(leaf, leaf, 10);
        // Four nodes, each once: the root is reachable twice but reported once.
        assert_eq!(common.len(), 4);
        let root_hit = common
            .iter()
            .find(|hit| graph.lemmas(hit.sense) == ["вершина"])
            .unwrap();
        assert_eq!((root_hit.dist_a, root_hit.dist_b), (2, 2));
    }

    #[test]
    fn test_unknown_parent_is_an_error() {
        let bad = "s1\tкот\ts9\n";
        match Wordnet::from_reader(bad.as_bytes()) {
            Err(ProfileError::Wordnet { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("s9"));
            }
            other => panic!("expected wordnet error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_id_is_an_error() {
        let bad = "s1\tкот\ns1\tпес\n";
        match Wordnet::from_reader(bad.as_bytes()) {
            Err(ProfileError::Wordnet { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected wordnet error, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_sense_is_empty() {
        let graph = graph();
        assert!(graph.lemmas(SenseId(99)).is_empty());
        assert!(graph.common_hypernyms(SenseId(99), SenseId(0), 5).is_empty());
    }

    #[test]
    fn test_forward_parent_reference() {
        let forward = "child\tребенок\troot\nroot\tкорень\n";
        let graph = Wordnet::from_reader(forward.as_bytes()).unwrap();
        let child = sense(&graph, "ребенок");
        let root = sense(&graph, "корень");

        let common = graph.common_hypernyms(child, root, 5);
        assert_eq!(common.len(), 1);
        assert_eq!(common[0].sense, root);
    }
}
