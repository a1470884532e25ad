//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use sylcount_core::config::Config;
use sylcount_core::{LexiconIndex, SyllableCounter};

pub mod info;
pub mod lyrics;
pub mod word;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Build a counter from CLI overrides and loaded configuration.
///
/// The lexicon is required; commands abort with a hint when neither the
/// flag nor the config supplies one. The phonetic dictionary is optional.
/// `strict` turns on `strict_incoming_arcs` over whatever the config says.
pub fn build_counter(
    lexicon: Option<&Utf8Path>,
    phonetic: Option<&Utf8Path>,
    strict: bool,
    config: &Config,
) -> anyhow::Result<SyllableCounter> {
    let lexicon =
        lexicon.context("no lexicon configured: pass --lexicon or set lexicon_path in config")?;
    let index = LexiconIndex::load(lexicon, phonetic)
        .with_context(|| format!("failed to load lexicon {lexicon}"))?;
    let mut options = config.analogy_options();
    options.strict_incoming_arcs = strict || options.strict_incoming_arcs;
    Ok(SyllableCounter::with_options(index, options))
}
