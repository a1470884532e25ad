//! Lyrics command — count syllables across a lyrics file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use sylcount_core::config::Config;

use super::{build_counter, read_input_file};

/// Arguments for the `lyrics` subcommand.
#[derive(Args, Debug)]
pub struct LyricsArgs {
    /// Lyrics file to count.
    pub file: Utf8PathBuf,

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

/// Count syllables for every word of a lyrics file.
#[instrument(name = "cmd_lyrics", skip_all, fields(file = %args.file))]
pub fn cmd_lyrics(
    args: LyricsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing lyrics command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let mut counter = build_counter(
        args.lexicon.as_deref().or(config.lexicon_path.as_deref()),
        args.phonetic.as_deref().or(config.phonetic_path.as_deref()),
        args.strict_incoming_arcs,
        config,
    )?;

    let report = counter.count_lyrics(&content);

    let (hits, misses) = counter.cache_stats();
    debug!(hits, misses, total = report.total, "counted lyrics");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (i, section) in report.sections.iter().enumerate() {
            println!("{}", format!("Section {}", i + 1).bold());
            for line in &section.lines {
                let counts: Vec<String> = line.iter().map(ToString::to_string).collect();
                let line_total: usize = line.iter().sum();
                println!("  {} = {line_total}", counts.join(" "));
            }
            println!("  {}: {}", "section total".dimmed(), section.total);
        }
        println!("{}: {}", "Total".bold(), report.total);
    }

    Ok(())
}
