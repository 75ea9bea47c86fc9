use super::Normalizer;

/// Unicode-aware, locale-independent lowercasing
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseNormalizer;

impl LowercaseNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for LowercaseNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}
