//! Error types for sylcount-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading dictionary sources.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The analogy source file could not be read. Without it the engine
    /// has no training data, so the index cannot be built.
    #[error("failed to read dictionary {path}: {source}")]
    Read {
        /// Path of the file that could not be read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;
