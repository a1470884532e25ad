//! Dictionary loading and indexing.
//!
//! Builds the two structures the engine runs on: an analogy lexicon of
//! boundary-annotated word strings (training data for the lattice) and a
//! direct word-to-syllable-count table consulted before any inference.

use std::collections::HashMap;
use std::fs;

use camino::Utf8Path;

use crate::error::{LexiconError, LexiconResult};

/// Marker in the analogy source meaning "no break after this letter".
const ATTACH_RIGHT: char = '>';
/// Marker in the analogy source meaning "no break before this letter".
const ATTACH_LEFT: char = '<';

/// Indexed dictionary data: annotated analogy entries plus a
/// word-to-count table merged from both sources.
#[derive(Debug, Clone, Default)]
pub struct LexiconIndex {
    /// Annotated entries of the form `#w1*w2-w3#`, one per analogy word.
    entries: Vec<String>,
    /// Lowercase word to known syllable count.
    counts: HashMap<String, usize>,
}

impl LexiconIndex {
    /// Load and index the analogy source and, optionally, a phonetic
    /// dictionary.
    ///
    /// The analogy source is required: without it the engine has no
    /// training data, so a read failure is an error. A phonetic
    /// dictionary that cannot be read only costs lookup coverage and is
    /// logged and skipped.
    #[tracing::instrument(skip_all, fields(analogy = %analogy_path))]
    pub fn load(
        analogy_path: &Utf8Path,
        phonetic_path: Option<&Utf8Path>,
    ) -> LexiconResult<Self> {
        let analogy = fs::read_to_string(analogy_path).map_err(|source| LexiconError::Read {
            path: analogy_path.to_string(),
            source,
        })?;

        let phonetic = match phonetic_path {
            Some(path) => match fs::read_to_string(path) {
                Ok(text) => text,
                Err(error) => {
                    tracing::warn!(path = %path, %error, "unable to read phonetic dictionary");
                    String::new()
                }
            },
            None => String::new(),
        };

        Ok(Self::from_sources(&analogy, &phonetic))
    }

    /// Index already-loaded dictionary text.
    pub fn from_sources(analogy: &str, phonetic: &str) -> Self {
        let mut index = Self::default();
        index.parse_analogy(analogy);
        index.parse_phonetic(phonetic);
        tracing::debug!(
            entries = index.entries.len(),
            words = index.counts.len(),
            "lexicon indexed"
        );
        index
    }

    /// An index with no entries and no counts.
    ///
    /// Useful for running in lookup-free fallback mode, where every word
    /// goes through the naive estimate.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The annotated analogy entries.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Known syllable count for a lowercase word, if either source had it.
    pub fn count_of(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of words with a known count.
    pub fn word_count(&self) -> usize {
        self.counts.len()
    }

    /// Split the index into its annotated entries and its count table.
    pub fn into_parts(self) -> (Vec<String>, HashMap<String, usize>) {
        (self.entries, self.counts)
    }

    /// Parse the analogy source: one word per line with a marker string
    /// aligned to its letters. A break lands after letter `i` unless the
    /// marker at `i` attaches right or the marker at `i + 1` attaches
    /// left.
    fn parse_analogy(&mut self, source: &str) {
        for line in source.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let (Some(word), Some(markers)) = (fields.first(), fields.get(2)) else {
                tracing::warn!(line, "skipping malformed analogy line");
                continue;
            };

            let letters: Vec<char> = word.chars().collect();
            let marks: Vec<char> = markers.chars().collect();
            if marks.len() < letters.len() {
                tracing::warn!(line, "skipping analogy line with short marker string");
                continue;
            }

            let mut annotated = String::with_capacity(letters.len() * 2 + 1);
            annotated.push('#');
            let mut breaks = 0;
            for (i, &letter) in letters.iter().enumerate() {
                annotated.push(letter);
                if i + 1 < letters.len() {
                    if marks[i] != ATTACH_RIGHT && marks[i + 1] != ATTACH_LEFT {
                        annotated.push('-');
                        breaks += 1;
                    } else {
                        annotated.push('*');
                    }
                }
            }
            annotated.push('#');

            self.entries.push(annotated);
            self.counts.insert(word.to_lowercase(), breaks + 1);
        }
    }

    /// Parse a phonetic dictionary: `WORD  PH0 PH1 ...` lines where
    /// stress digits in the transcription mark syllable nuclei. Alternate
    /// pronunciations (word token ending in `)`) are skipped, and when
    /// both sources know a word the larger count wins.
    fn parse_phonetic(&mut self, source: &str) {
        for line in source.lines() {
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let trimmed = line.trim_start();
            let (word, remainder) = trimmed
                .split_once(char::is_whitespace)
                .unwrap_or((trimmed, ""));
            if word.is_empty() || word.ends_with(')') {
                continue;
            }

            let count = remainder.chars().filter(char::is_ascii_digit).count();
            if count == 0 {
                continue;
            }

            self.counts
                .entry(word.to_lowercase())
                .and_modify(|existing| *existing = (*existing).max(count))
                .or_insert(count);
        }
    }
}
