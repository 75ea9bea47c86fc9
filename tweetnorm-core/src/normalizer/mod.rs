//! Text normalizers
//!
//! Each normalizer is a pure text-to-text mapping behind the [`Normalizer`]
//! trait. A [`ChainNormalizer`] applies several of them in a fixed order.

mod chain;
mod lowercase;
mod regex;
mod string_set;
mod unicode_range;

pub use self::regex::{RegexNormalizer, URL_PATTERN};
pub use chain::ChainNormalizer;
pub use lowercase::LowercaseNormalizer;
pub use string_set::{StringSetNormalizer, PUNCTUATION};
pub use unicode_range::{CodeRange, UnicodeRangeNormalizer};

/// A pure text transform
///
/// Implementations must be total over valid UTF-8 input and hold no
/// mutable state, so a single instance can be shared across threads.
pub trait Normalizer: Send + Sync {
    /// Map the input text to its normalized form
    fn normalize(&self, text: &str) -> String;

    /// Short identifier used in logs and pipeline descriptions
    fn name(&self) -> &str;
}
