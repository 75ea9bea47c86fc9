//! Error types for pipeline construction
//!
//! Every variant is raised while building a normalizer, tokenizer or
//! pipeline. Once built, normalization and tokenization cannot fail.

use thiserror::Error;

/// Construction-time errors
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Regular expression failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler diagnostic
        #[source]
        source: regex::Error,
    },

    /// Code range is inverted or leaves the unicode scalar space
    #[error("Invalid code range {start:#X}..={end:#X}")]
    InvalidRange {
        /// Lower bound (inclusive)
        start: u32,
        /// Upper bound (inclusive)
        end: u32,
    },

    /// Unknown named code range
    #[error("Unknown code range: {0}")]
    UnknownRange(String),

    /// String set contains an unusable member
    #[error("Invalid string set: {0}")]
    InvalidStringSet(String),

    /// Tokenizer window must hold at least one unit
    #[error("Invalid window size: {0} (must be at least 1)")]
    InvalidWindowSize(usize),

    /// Tokenizer level is neither `word` nor `character`
    #[error("Unsupported level: {0}")]
    UnsupportedLevel(String),

    /// Unknown embedded preset
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for construction operations
pub type Result<T> = std::result::Result<T, NormalizeError>;
