//! Normalize-then-tokenize pipeline

use crate::normalizer::{ChainNormalizer, Normalizer};
use crate::tokenizer::NGramTokenizer;
use serde::Serialize;

/// Result of running one text through a [`Pipeline`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    /// Text after the whole chain
    pub normalized: String,
    /// N-grams of the normalized text in scan order
    pub ngrams: Vec<String>,
}

/// A normalizer chain paired with a tokenizer
///
/// Both halves are immutable once built, so a pipeline can be shared
/// across threads and reused for any number of texts.
#[derive(Debug)]
pub struct Pipeline {
    chain: ChainNormalizer,
    tokenizer: NGramTokenizer,
}

impl Pipeline {
    pub fn new(chain: ChainNormalizer, tokenizer: NGramTokenizer) -> Self {
        Self { chain, tokenizer }
    }

    pub fn chain(&self) -> &ChainNormalizer {
        &self.chain
    }

    pub fn tokenizer(&self) -> &NGramTokenizer {
        &self.tokenizer
    }

    /// Run only the normalizer chain
    pub fn normalize(&self, text: &str) -> String {
        self.chain.normalize(text)
    }

    /// Run only the tokenizer
    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        self.tokenizer.tokenize(normalized)
    }

    /// Normalize `text`, then tokenize the result
    pub fn process(&self, text: &str) -> PipelineOutput {
        let normalized = self.normalize(text);
        let ngrams = self.tokenize(&normalized);
        PipelineOutput { normalized, ngrams }
    }

    /// One-line summary such as `lowercase -> url => 2-gram character`
    pub fn describe(&self) -> String {
        let chain = if self.chain.is_empty() {
            "(identity)".to_string()
        } else {
            self.chain.names().join(" -> ")
        };
        format!(
            "{chain} => {}-gram {}",
            self.tokenizer.window_size(),
            self.tokenizer.level()
        )
    }
}
