//! Sliding-window n-gram extraction
//!
//! The tokenizer cuts normalized text into overlapping windows of
//! `window_size` units. Units are either unicode scalar values
//! ([`Level::Character`]) or space-separated words ([`Level::Word`]).

use crate::error::{NormalizeError, Result};
use std::fmt;
use std::str::FromStr;

/// Window of one unit
pub const UNIGRAM: usize = 1;
/// Window of two units
pub const BIGRAM: usize = 2;
/// Window of three units
pub const TRIGRAM: usize = 3;

/// Unit of tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Words separated by a single `' '`
    Word,
    /// Unicode scalar values
    #[default]
    Character,
}

impl Level {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Word => "word",
            Level::Character => "character",
        }
    }
}

impl FromStr for Level {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "word" | "words" => Ok(Level::Word),
            "character" | "characters" | "char" => Ok(Level::Character),
            _ => Err(NormalizeError::UnsupportedLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// N-gram tokenizer with a fixed window and level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NGramTokenizer {
    window_size: usize,
    level: Level,
}

impl NGramTokenizer {
    /// Create a tokenizer; `window_size` must be at least 1
    pub fn new(window_size: usize, level: Level) -> Result<Self> {
        if window_size == 0 {
            return Err(NormalizeError::InvalidWindowSize(window_size));
        }
        log::debug!("Built {level} tokenizer with window {window_size}");
        Ok(Self { window_size, level })
    }

    /// Create a tokenizer from a level name such as `"word"`
    pub fn with_level_name(window_size: usize, level: &str) -> Result<Self> {
        Self::new(window_size, level.parse()?)
    }

    /// Units per n-gram
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Tokenization unit
    pub fn level(&self) -> Level {
        self.level
    }

    /// Extract n-grams in left-to-right order
    ///
    /// Input shorter than the window yields an empty vector.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self.level {
            Level::Word => self.tokenize_words(text),
            Level::Character => self.tokenize_characters(text),
        }
    }

    fn tokenize_characters(&self, text: &str) -> Vec<String> {
        // Byte offset of every char start plus the end of the text
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = offsets.len() - 1;

        if char_count < self.window_size {
            return Vec::new();
        }

        (0..=char_count - self.window_size)
            .map(|i| text[offsets[i]..offsets[i + self.window_size]].to_string())
            .collect()
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        // Runs of spaces are kept as empty words
        let words: Vec<&str> = text.split(' ').collect();
        words
            .windows(self.window_size)
            .map(|window| window.join(" "))
            .collect()
    }
}
