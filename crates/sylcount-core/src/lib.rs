//! Core library for sylcount.
//!
//! This crate provides the syllable counting engine used by the `sylcount`
//! CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`analogy`] - Pronunciation-by-analogy inference over a lexicon
//! - [`config`] - Configuration loading and management
//! - [`counter`] - The word and lyric counting front end
//! - [`error`] - Error types and result aliases
//! - [`heuristic`] - Spelling-based syllable estimation
//! - [`lexicon`] - Lexicon and phonetic dictionary parsing
//! - [`lyrics`] - Lyric segmentation and count reports
//! - [`numwords`] - Spelling numerals out in English
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use sylcount_core::{LexiconIndex, SyllableCounter};
//!
//! let index = LexiconIndex::load(Utf8Path::new("lexicon.txt"), None)
//!     .expect("failed to load lexicon");
//! let mut counter = SyllableCounter::new(index);
//!
//! println!("{}", counter.count_word("analogy"));
//! ```
#![deny(unsafe_code)]

pub mod analogy;
pub mod config;
pub mod counter;
pub mod error;
pub mod heuristic;
pub mod lexicon;
pub mod lyrics;
pub mod numwords;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use analogy::AnalogyOptions;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use counter::SyllableCounter;
pub use error::{ConfigError, ConfigResult, LexiconError, LexiconResult};
pub use lexicon::LexiconIndex;
pub use lyrics::{LyricsCounts, SectionCounts};
