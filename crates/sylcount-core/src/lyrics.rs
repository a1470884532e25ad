//! Lyric segmentation and count reports.
//!
//! Lyrics arrive as plain text with bracketed section headers, the format
//! lyric sites export. Headers delimit sections, producer credits are
//! noise, and hyphens, em-dashes, and slashes all join words that are sung
//! separately.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marker distinguishing a producer-credit header from a section header.
const CREDIT_MARKER: &str = "Produced";

/// Split a lyric into sections of lines of words.
///
/// A line that starts with `[` and ends with `]` is a header: it closes
/// the current section if that section has any lines, except that credit
/// headers are dropped without closing anything. Other non-empty lines
/// have `-`, `—`, and `/` normalized to spaces and are tokenized on
/// whitespace. The trailing section is always returned, even when empty.
pub fn split_sections(lyrics: &str) -> Vec<Vec<Vec<String>>> {
    let mut sections = Vec::new();
    let mut section: Vec<Vec<String>> = Vec::new();

    for line in lyrics.lines() {
        if line.starts_with('[') && line.ends_with(']') {
            if line.contains(CREDIT_MARKER) {
                continue;
            }
            if !section.is_empty() {
                sections.push(std::mem::take(&mut section));
            }
        } else if !line.is_empty() {
            let joined = line.replace(['-', '—', '/'], " ");
            section.push(joined.split_whitespace().map(str::to_string).collect());
        }
    }
    sections.push(section);

    sections
}

/// Syllable counts for a full lyric, grouped the way the text is.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LyricsCounts {
    /// Counts per section, in order of appearance.
    pub sections: Vec<SectionCounts>,
    /// Sum of every word's count across the lyric.
    pub total: usize,
}

/// Syllable counts for one section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SectionCounts {
    /// One inner vector per line, one count per word.
    pub lines: Vec<Vec<usize>>,
    /// Sum of this section's counts.
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &[&str]) -> Vec<String> {
        line.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn headers_delimit_sections() {
        let lyrics = "[Verse 1]\nhello there\nagain\n[Chorus]\ngoodbye now\n";
        let sections = split_sections(lyrics);
        assert_eq!(
            sections,
            vec![
                vec![words(&["hello", "there"]), words(&["again"])],
                vec![words(&["goodbye", "now"])],
            ]
        );
    }

    #[test]
    fn credit_headers_do_not_close_sections() {
        let lyrics = "first line\n[Produced by Somebody]\nsecond line\n";
        let sections = split_sections(lyrics);
        assert_eq!(
            sections,
            vec![vec![words(&["first", "line"]), words(&["second", "line"])]]
        );
    }

    #[test]
    fn separators_join_words() {
        let sections = split_sections("well-known — right/now\n");
        assert_eq!(
            sections,
            vec![vec![words(&["well", "known", "right", "now"])]]
        );
    }

    #[test]
    fn blank_lines_skipped_inside_sections() {
        let sections = split_sections("one\n\ntwo\n");
        assert_eq!(sections, vec![vec![words(&["one"]), words(&["two"])]]);
    }

    #[test]
    fn trailing_section_always_present() {
        let sections = split_sections("line\n[Outro]");
        assert_eq!(sections.len(), 2);
        assert!(sections[1].is_empty());

        let empty = split_sections("");
        assert_eq!(empty, vec![Vec::<Vec<String>>::new()]);
    }

    #[test]
    fn leading_header_adds_no_empty_section() {
        let sections = split_sections("[Intro]\nfirst\n");
        assert_eq!(sections, vec![vec![words(&["first"])]]);
    }

    #[test]
    fn reports_serialize_with_stable_field_names() {
        let report = LyricsCounts {
            sections: vec![SectionCounts {
                lines: vec![vec![2, 1], vec![3]],
                total: 6,
            }],
            total: 6,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total"], 6);
        assert_eq!(json["sections"][0]["total"], 6);
        assert_eq!(json["sections"][0]["lines"][1][0], 3);

        let back: LyricsCounts = serde_json::from_value(json).unwrap();
        assert_eq!(back.sections[0].lines[0], vec![2, 1]);
    }
}
