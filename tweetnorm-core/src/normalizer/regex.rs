//! Regular-expression replacement

use super::Normalizer;
use crate::error::{NormalizeError, Result};
use regex::Regex;

/// URL matcher covering scheme-prefixed (`http://...`, `mailto:...`) and bare
/// `www.` or `user@host` forms, with optional path, query and fragment.
pub const URL_PATTERN: &str = concat!(
    r"(?:(?:[A-Za-z]{3,9}:(?://)?)(?:[-;:&=+$,0-9A-Za-z_]+@)?[A-Za-z0-9.-]+",
    r"|(?:www\.|[-;:&=+$,0-9A-Za-z_]+@)[A-Za-z0-9.-]+)",
    r"(?:(?:/[+~%/.0-9A-Za-z_-]*)?\??(?:[-+=&;%@.0-9A-Za-z_]*)#?[0-9A-Za-z_]*)?",
);

/// Replaces every non-overlapping match of a pattern
///
/// Matches are found left to right with leftmost-first semantics. The
/// replacement may refer to capture groups as `$1` or `$name`.
#[derive(Debug, Clone)]
pub struct RegexNormalizer {
    regex: Regex,
    replacement: String,
    name: &'static str,
}

impl RegexNormalizer {
    /// Compile `pattern` once; fails if the pattern is malformed
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| NormalizeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            regex,
            replacement: replacement.into(),
            name: "regex",
        })
    }

    /// URL stripper built on [`URL_PATTERN`]
    pub fn url(replacement: impl Into<String>) -> Result<Self> {
        let mut normalizer = Self::new(URL_PATTERN, replacement)?;
        normalizer.name = "url";
        Ok(normalizer)
    }

    /// Source pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Normalizer for RegexNormalizer {
    fn normalize(&self, text: &str) -> String {
        self.regex
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &str {
        self.name
    }
}
