//! Multi-pattern literal replacement

use super::Normalizer;
use crate::error::{NormalizeError, Result};
use aho_corasick::{AhoCorasick, MatchKind};

/// Punctuation and symbols commonly stripped from tweets
pub const PUNCTUATION: &[&str] = &[
    "?", ".", ",", "@", "-", "/", ":", "#", "!", "(", ")", "[", "]", "¿",
];

/// Replaces every occurrence of any string in a fixed set
///
/// The input is scanned once. When several members match at the same
/// position the one listed first wins, and replaced output is never
/// scanned again.
#[derive(Debug, Clone)]
pub struct StringSetNormalizer {
    strings: Vec<String>,
    replacement: String,
    matcher: AhoCorasick,
}

impl StringSetNormalizer {
    /// Build the matcher for `strings`; empty members are rejected
    pub fn new<I, S>(strings: I, replacement: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let strings: Vec<String> = strings.into_iter().map(Into::into).collect();

        if let Some(position) = strings.iter().position(String::is_empty) {
            return Err(NormalizeError::InvalidStringSet(format!(
                "member {position} is empty"
            )));
        }

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(&strings)
            .map_err(|e| NormalizeError::InvalidStringSet(e.to_string()))?;

        Ok(Self {
            strings,
            replacement: replacement.into(),
            matcher,
        })
    }

    /// Strip [`PUNCTUATION`] by replacing it with `replacement`
    pub fn punctuation(replacement: impl Into<String>) -> Result<Self> {
        Self::new(PUNCTUATION.iter().copied(), replacement)
    }

    /// Configured members in priority order
    pub fn strings(&self) -> &[String] {
        &self.strings
    }
}

impl Normalizer for StringSetNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut normalized = String::with_capacity(text.len());
        self.matcher.replace_all_with(text, &mut normalized, |_, _, dst| {
            dst.push_str(&self.replacement);
            true
        });
        normalized
    }

    fn name(&self) -> &str {
        "string_set"
    }
}
