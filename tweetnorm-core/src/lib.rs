//! Text normalization and n-gram tokenization for short, noisy text
//!
//! This crate prepares social-media text (tweets and the like) for n-gram
//! extraction. Raw text runs through an ordered chain of pure normalizers
//! and the result is cut into overlapping character or word n-grams.
//!
//! # Architecture
//!
//! - **Normalizers**: lowercasing, code-range filtering, regex and
//!   multi-string replacement, all behind the [`Normalizer`] trait
//! - **Chain**: [`ChainNormalizer`] applies normalizers in a fixed order
//! - **Tokenizer**: [`NGramTokenizer`] extracts sliding windows over
//!   characters or words
//! - **Configuration**: TOML pipeline descriptions and embedded presets
//!
//! All validation happens at construction. A built chain, tokenizer or
//! pipeline never fails.
//!
//! # Example
//!
//! ```rust
//! use tweetnorm_core::{
//!     ChainNormalizer, CodeRange, Level, LowercaseNormalizer, NGramTokenizer, Normalizer,
//!     RegexNormalizer, StringSetNormalizer, UnicodeRangeNormalizer,
//! };
//!
//! let chain = ChainNormalizer::new(vec![
//!     Box::new(LowercaseNormalizer::new()),
//!     Box::new(UnicodeRangeNormalizer::new(CodeRange::EMOTICONS, "")),
//!     Box::new(RegexNormalizer::url("").unwrap()),
//!     Box::new(StringSetNormalizer::punctuation("").unwrap()),
//! ]);
//! let normalized = chain.normalize("Hello #World! http://example.org");
//! assert_eq!(normalized, "hello world ");
//!
//! let tokenizer = NGramTokenizer::new(2, Level::Word).unwrap();
//! assert_eq!(tokenizer.tokenize(&normalized), vec!["hello world", "world "]);
//! ```

pub mod config;
pub mod error;
pub mod normalizer;
pub mod pipeline;
pub mod tokenizer;

pub use config::{presets, NormalizerConfig, PipelineConfig, TokenizerConfig};
pub use error::{NormalizeError, Result};
pub use normalizer::{
    ChainNormalizer, CodeRange, LowercaseNormalizer, Normalizer, RegexNormalizer,
    StringSetNormalizer, UnicodeRangeNormalizer, PUNCTUATION, URL_PATTERN,
};
pub use pipeline::{Pipeline, PipelineOutput};
pub use tokenizer::{Level, NGramTokenizer, BIGRAM, TRIGRAM, UNIGRAM};
