//! Word and lyric syllable counting.
//!
//! [`SyllableCounter`] resolves each token through a fixed cascade: spell
//! out numerals, normalize, consult the count table, infer by analogy
//! against the lexicon, and as a last resort estimate from spelling.
//! Every inferred count is written back to the table, so the table doubles
//! as a cache that grows with use.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::analogy::{self, AnalogyOptions};
use crate::heuristic;
use crate::lexicon::LexiconIndex;
use crate::lyrics::{self, LyricsCounts, SectionCounts};
use crate::numwords;

/// Strips everything that is not a letter, whitespace, or an apostrophe.
static NORMALIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s']+").expect("valid regex"));

/// Counts syllables for words and whole lyrics.
#[derive(Debug, Clone)]
pub struct SyllableCounter {
    entries: Vec<String>,
    counts: HashMap<String, usize>,
    options: AnalogyOptions,
    hits: usize,
    misses: usize,
}

impl SyllableCounter {
    /// Build a counter over an indexed lexicon.
    pub fn new(index: LexiconIndex) -> Self {
        Self::with_options(index, AnalogyOptions::default())
    }

    /// Build a counter with explicit analogy options.
    pub fn with_options(index: LexiconIndex, options: AnalogyOptions) -> Self {
        let (entries, counts) = index.into_parts();
        Self {
            entries,
            counts,
            options,
            hits: 0,
            misses: 0,
        }
    }

    /// Count the syllables in one token.
    ///
    /// Numeric tokens are expanded to their spoken English first, so
    /// `"3"` is counted as `"three"` and `"3.14"` as
    /// `"three point one four"`. Returns 0 when nothing pronounceable
    /// remains after normalization.
    #[tracing::instrument(skip(self))]
    pub fn count_word(&mut self, word: &str) -> usize {
        if let Ok(value) = word.parse::<f64>() {
            if let Some(spelled) = numwords::spell_out(value) {
                let spelled = spelled.replace('-', " ");
                return spelled
                    .split_whitespace()
                    .map(|part| self.count_word(part))
                    .sum();
            }
        }

        let normalized = NORMALIZE_PATTERN.replace_all(word, "").to_lowercase();
        if normalized.is_empty() {
            return 0;
        }

        if let Some(&count) = self.counts.get(&normalized) {
            self.hits += 1;
            return count;
        }
        self.misses += 1;

        // Analogy pronounces the word without apostrophes; the spelling
        // estimate keeps them so they break vowel groups.
        let bare = normalized.replace('\'', "");
        let count = analogy::syllabify(&bare, &self.entries, self.options)
            .unwrap_or_else(|| heuristic::estimate_syllables(&normalized));
        self.counts.insert(normalized, count);
        count
    }

    /// Count every word of a lyric, preserving its section and line shape.
    #[tracing::instrument(skip_all, fields(bytes = lyrics.len()))]
    pub fn count_lyrics(&mut self, lyrics: &str) -> LyricsCounts {
        let mut sections = Vec::new();
        let mut total = 0;

        for section in lyrics::split_sections(lyrics) {
            let mut lines = Vec::with_capacity(section.len());
            let mut section_total = 0;
            for line in &section {
                let counts: Vec<usize> =
                    line.iter().map(|word| self.count_word(word)).collect();
                section_total += counts.iter().sum::<usize>();
                lines.push(counts);
            }
            total += section_total;
            sections.push(SectionCounts {
                lines,
                total: section_total,
            });
        }

        LyricsCounts { sections, total }
    }

    /// Words in the analogical lexicon.
    pub fn lexicon_size(&self) -> usize {
        self.entries.len()
    }

    /// Count-table lookups that were answered from the table, and those
    /// that fell through to inference.
    pub const fn cache_stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }
}
