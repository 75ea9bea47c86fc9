//! Code-point range filtering

use super::Normalizer;
use crate::error::{NormalizeError, Result};

/// Highest unicode scalar value
const MAX_SCALAR: u32 = char::MAX as u32;

/// Inclusive range of unicode scalar values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    start: u32,
    end: u32,
}

impl CodeRange {
    /// Emoticons block (U+1F600..=U+1F64F)
    pub const EMOTICONS: CodeRange = CodeRange {
        start: 0x1F600,
        end: 0x1F64F,
    };

    /// Transport and Map Symbols block (U+1F680..=U+1F6FF)
    pub const TRANSPORT_AND_MAP: CodeRange = CodeRange {
        start: 0x1F680,
        end: 0x1F6FF,
    };

    /// Names accepted by [`CodeRange::named`]
    pub const NAMES: &'static [&'static str] = &["emoticons", "transport_and_map"];

    /// Create a range, rejecting inverted bounds and values above U+10FFFF
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end || end > MAX_SCALAR {
            return Err(NormalizeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Look up a predefined range by name
    pub fn named(name: &str) -> Result<Self> {
        match name {
            "emoticons" | "emoticon" => Ok(Self::EMOTICONS),
            "transport_and_map" | "transport-and-map" => Ok(Self::TRANSPORT_AND_MAP),
            other => Err(NormalizeError::UnknownRange(other.to_string())),
        }
    }

    /// Lower bound (inclusive)
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Upper bound (inclusive)
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Check whether a character falls inside the range
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        (self.start..=self.end).contains(&(ch as u32))
    }
}

/// Replaces every character inside a [`CodeRange`] with a fixed string
///
/// The input is walked one scalar value at a time. The replacement is
/// emitted verbatim and never re-filtered.
#[derive(Debug, Clone)]
pub struct UnicodeRangeNormalizer {
    range: CodeRange,
    replacement: String,
}

impl UnicodeRangeNormalizer {
    /// Create a filter for a range
    pub fn new(range: CodeRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Create a filter from raw bounds
    pub fn from_bounds(start: u32, end: u32, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self::new(CodeRange::new(start, end)?, replacement))
    }

    /// The filtered range
    pub fn range(&self) -> CodeRange {
        self.range
    }
}

impl Normalizer for UnicodeRangeNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut normalized = String::with_capacity(text.len());
        for ch in text.chars() {
            if self.range.contains(ch) {
                normalized.push_str(&self.replacement);
            } else {
                normalized.push(ch);
            }
        }
        normalized
    }

    fn name(&self) -> &str {
        "unicode_range"
    }
}
