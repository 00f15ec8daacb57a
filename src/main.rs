use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, error, LevelFilter};

use lexprofile::nlp::DictMorph;
use lexprofile::pipeline::TableProfiler;
use lexprofile::semantic::Wordnet;
use lexprofile::table::{read_table, write_profile};
use lexprofile::types::{ProfilerConfig, DEFAULT_MAX_DEPTH, DEFAULT_VOCAB_LIMIT};

/// Ranked word-frequency and hypernym profiles for survey CSV columns.
#[derive(Parser)]
#[command(name = "lexprofile", version, about)]
struct Args {
    /// Input CSV, one survey question per column
    #[arg(short, long, default_value = "table.csv")]
    file: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,

    /// Morphological lexicon (TSV: form, lemma, tag)
    #[arg(long, default_value = "data/lexicon.tsv")]
    lexicon: PathBuf,

    /// Synset graph (TSV: id, lemmas, parents)
    #[arg(long, default_value = "data/synsets.tsv")]
    wordnet: PathBuf,

    /// Skip the hypernym tables
    #[arg(long)]
    no_hypernyms: bool,

    /// Maximum depth of the common-hypernym search
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// How many top lemmas per column feed the pairwise hypernym search
    #[arg(long, default_value_t = DEFAULT_VOCAB_LIMIT)]
    top: usize,

    /// Verbose diagnostics
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let morph = DictMorph::from_path(&args.lexicon)
        .with_context(|| format!("loading lexicon {}", args.lexicon.display()))?;
    debug!("lexicon: {} surface forms", morph.len());

    let wordnet = if args.no_hypernyms {
        None
    } else {
        let graph = Wordnet::from_path(&args.wordnet)
            .with_context(|| format!("loading synsets {}", args.wordnet.display()))?;
        debug!("wordnet: {} synsets", graph.len());
        Some(graph)
    };

    let table = match read_table(&args.file) {
        Ok(table) => table,
        Err(err) if err.is_not_found() => {
            error!("input file {} not found", args.file.display());
            return Ok(());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", args.file.display()));
        }
    };

    let config = ProfilerConfig::default()
        .with_max_depth(args.max_depth)
        .with_hypernym_vocab_limit(args.top);
    let mut profiler = TableProfiler::new(&morph).with_config(config);
    if let Some(graph) = wordnet.as_ref() {
        profiler = profiler.with_semantic(graph);
    }

    let profile = profiler.profile(&table);
    write_profile(&args.output, &profile)
        .with_context(|| format!("writing {}", args.output.display()))?;
    debug!(
        "wrote {} profiled columns to {}",
        profile.columns.len(),
        args.output.display()
    );
    Ok(())
}
