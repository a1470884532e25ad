//! Word command — count syllables in words given on the command line.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use sylcount_core::config::Config;

use super::build_counter;

/// Arguments for the `word` subcommand.
#[derive(Args, Debug)]
pub struct WordArgs {
    /// Words to count.
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Syllable-annotated lexicon file (overrides config).
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<Utf8PathBuf>,

    /// Phonetic dictionary file (overrides config).
    #[arg(long, value_name = "FILE")]
    pub phonetic: Option<Utf8PathBuf>,

    /// Keep only shortest-distance arcs during path search (overrides config).
    #[arg(long)]
    pub strict_incoming_arcs: bool,
}

/// One word's syllable count.
#[derive(Serialize)]
struct WordCount {
    word: String,
    syllables: usize,
}

/// Count syllables for each word argument.
#[instrument(name = "cmd_word", skip_all, fields(words = args.words.len()))]
pub fn cmd_word(args: WordArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(words = args.words.len(), "executing word command");

    let mut counter = build_counter(
        args.lexicon.as_deref().or(config.lexicon_path.as_deref()),
        args.phonetic.as_deref().or(config.phonetic_path.as_deref()),
        args.strict_incoming_arcs,
        config,
    )?;

    let counts: Vec<WordCount> = args
        .words
        .iter()
        .map(|word| WordCount {
            word: word.clone(),
            syllables: counter.count_word(word),
        })
        .collect();

    let (hits, misses) = counter.cache_stats();
    debug!(hits, misses, "counted words");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else if let [only] = counts.as_slice() {
        // Bare count for scripting when a single word was given
        println!("{}", only.syllables);
    } else {
        for count in &counts {
            println!("{}: {}", count.word.cyan(), count.syllables);
        }
    }

    Ok(())
}
