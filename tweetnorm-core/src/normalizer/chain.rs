//! Ordered composition of normalizers

use super::Normalizer;
use std::fmt;

/// Applies a fixed sequence of normalizers, each to the previous output
///
/// The order is set at construction and cannot change afterwards. An empty
/// chain returns its input unchanged. A chain is itself a [`Normalizer`],
/// so chains can be nested.
pub struct ChainNormalizer {
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl ChainNormalizer {
    /// Create a chain from normalizers in application order
    pub fn new(normalizers: Vec<Box<dyn Normalizer>>) -> Self {
        log::debug!(
            "Built normalizer chain: [{}]",
            normalizers
                .iter()
                .map(|n| n.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self { normalizers }
    }

    /// Names of the chained normalizers in application order
    pub fn names(&self) -> Vec<&str> {
        self.normalizers.iter().map(|n| n.name()).collect()
    }

    /// Number of chained normalizers
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    /// Check whether the chain has no normalizers
    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }
}

impl Normalizer for ChainNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_string();
        for normalizer in &self.normalizers {
            normalized = normalizer.normalize(&normalized);
            log::trace!("{}: {:?}", normalizer.name(), normalized);
        }
        normalized
    }

    fn name(&self) -> &str {
        "chain"
    }
}

impl fmt::Debug for ChainNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainNormalizer")
            .field("normalizers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::{
        CodeRange, LowercaseNormalizer, RegexNormalizer, StringSetNormalizer,
        UnicodeRangeNormalizer,
    };

    fn tweet_chain() -> ChainNormalizer {
        ChainNormalizer::new(vec![
            Box::new(LowercaseNormalizer::new()),
            Box::new(UnicodeRangeNormalizer::new(CodeRange::EMOTICONS, "")),
            Box::new(RegexNormalizer::url("").unwrap()),
            Box::new(StringSetNormalizer::punctuation("").unwrap()),
        ])
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = ChainNormalizer::new(Vec::new());
        assert!(chain.is_empty());
        assert_eq!(chain.normalize("Hello, World!"), "Hello, World!");
    }

    #[test]
    fn test_applies_in_order() {
        let chain = tweet_chain();
        assert_eq!(chain.len(), 4);
        assert_eq!(
            chain.normalize("Großartig! \u{1F60D} www.Bedcon.org #BEDCON"),
            "großartig   bedcon"
        );
    }

    #[test]
    fn test_order_matters_for_case_sensitive_regex() {
        let regex_first = ChainNormalizer::new(vec![
            Box::new(RegexNormalizer::new("[A-Z]+", "").unwrap()),
            Box::new(LowercaseNormalizer::new()),
        ]);
        let lowercase_first = ChainNormalizer::new(vec![
            Box::new(LowercaseNormalizer::new()),
            Box::new(RegexNormalizer::new("[A-Z]+", "").unwrap()),
        ]);

        assert_eq!(regex_first.normalize("ABC def"), " def");
        assert_eq!(lowercase_first.normalize("ABC def"), "abc def");
    }

    #[test]
    fn test_nested_chains() {
        let inner = ChainNormalizer::new(vec![Box::new(LowercaseNormalizer::new())]);
        let outer = ChainNormalizer::new(vec![
            Box::new(inner),
            Box::new(StringSetNormalizer::new(["#"], "").unwrap()),
        ]);
        assert_eq!(outer.names(), vec!["chain", "string_set"]);
        assert_eq!(outer.normalize("#Rust"), "rust");
    }

    #[test]
    fn test_debug_lists_names() {
        let debug = format!("{:?}", tweet_chain());
        assert!(debug.contains("lowercase"));
        assert!(debug.contains("unicode_range"));
        assert!(debug.contains("url"));
        assert!(debug.contains("string_set"));
    }
}
