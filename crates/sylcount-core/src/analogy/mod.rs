//! Pronunciation-by-analogy inference.
//!
//! Decomposes inference into three passes over a per-word lattice,
//! orchestrated by [`syllabify`]: build the lattice from the annotated
//! lexicon, run the shortest-distance search, then enumerate and score the
//! surviving paths.
//!
//! The approach follows Dedina & Nusbaum's PRONOUNCE and the multistrategy
//! scoring of Marchand & Damper, applied to syllable boundaries rather than
//! phonemes.

pub mod lattice;
pub mod scoring;
pub mod search;

/// Tuning knobs for the analogy engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalogyOptions {
    /// Drop a node's recorded incoming arcs whenever a strictly shorter
    /// route to it is found, keeping only arcs of the final distance.
    pub strict_incoming_arcs: bool,
}

/// Infer a syllable count for a word by analogy with the lexicon.
///
/// The word should already be normalized (lowercase letters, no
/// punctuation). Returns `None` when the lattice never connects the word's
/// boundaries, which the caller resolves with a fallback estimate.
#[tracing::instrument(skip_all, fields(word = %word, entries = entries.len()))]
pub fn syllabify(word: &str, entries: &[String], options: AnalogyOptions) -> Option<usize> {
    let mut lattice = lattice::Lattice::build(word, entries);
    search::shortest_paths(&mut lattice, options.strict_incoming_arcs);
    scoring::elect(&lattice)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn unambiguous_alignment_with_one_break() {
        let lexicon = entries(&["#c-a*t#"]);
        assert_eq!(
            syllabify("cat", &lexicon, AnalogyOptions::default()),
            Some(2)
        );
    }

    #[test]
    fn every_break_adds_a_syllable() {
        let lexicon = entries(&["#c-a-t#"]);
        assert_eq!(
            syllabify("cat", &lexicon, AnalogyOptions::default()),
            Some(3)
        );
    }

    #[test]
    fn overlapping_fragments_connect() {
        // Neither entry spans the whole word; their runs overlap in the
        // middle and the shortest route keeps the unbroken spelling.
        let lexicon = entries(&["#c*a*p#", "#h*a*t#"]);
        assert_eq!(
            syllabify("cat", &lexicon, AnalogyOptions::default()),
            Some(1)
        );
    }

    #[test]
    fn disconnected_words_yield_nothing() {
        let lexicon = entries(&["#c*a*t#"]);
        assert_eq!(syllabify("xyz", &lexicon, AnalogyOptions::default()), None);
        assert_eq!(syllabify("cat", &[], AnalogyOptions::default()), None);
    }

    #[test]
    fn strict_incoming_arcs_agrees_on_simple_words() {
        let lexicon = entries(&["#w*i-n#", "#i-n*d#", "#w*i*n*d#"]);
        let relaxed = syllabify("wind", &lexicon, AnalogyOptions::default());
        let strict = syllabify(
            "wind",
            &lexicon,
            AnalogyOptions {
                strict_incoming_arcs: true,
            },
        );
        assert_eq!(relaxed, strict);
    }
}
