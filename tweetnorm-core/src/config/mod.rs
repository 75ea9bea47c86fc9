//! Pipeline configuration
//!
//! Defines the TOML schema for normalizer chains and tokenizer settings,
//! plus the embedded presets.

pub mod presets;

use crate::error::{NormalizeError, Result};
use crate::normalizer::{
    ChainNormalizer, CodeRange, LowercaseNormalizer, Normalizer, RegexNormalizer,
    StringSetNormalizer, UnicodeRangeNormalizer,
};
use crate::pipeline::Pipeline;
use crate::tokenizer::{Level, NGramTokenizer, BIGRAM};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Normalizers in application order
    #[serde(default)]
    pub normalizers: Vec<NormalizerConfig>,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

/// One entry of the `[[normalizers]]` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NormalizerConfig {
    Lowercase,
    UnicodeRange {
        /// Predefined range name, exclusive with `start`/`end`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end: Option<u32>,
        #[serde(default)]
        replacement: String,
    },
    Regex {
        pattern: String,
        #[serde(default)]
        replacement: String,
    },
    Url {
        #[serde(default)]
        replacement: String,
    },
    StringSet {
        strings: Vec<String>,
        #[serde(default)]
        replacement: String,
    },
}

/// `[tokenizer]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Parsed with [`Level::from_str`](std::str::FromStr) during validation
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_window_size() -> usize {
    BIGRAM
}

fn default_level() -> String {
    Level::Character.as_str().to_string()
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            level: default_level(),
        }
    }
}

impl TokenizerConfig {
    /// Build the tokenizer, validating window and level
    pub fn build(&self) -> Result<NGramTokenizer> {
        NGramTokenizer::with_level_name(self.window_size, &self.level)
    }
}

impl NormalizerConfig {
    /// Build the normalizer described by this entry
    pub fn build(&self) -> Result<Box<dyn Normalizer>> {
        let normalizer: Box<dyn Normalizer> = match self {
            NormalizerConfig::Lowercase => Box::new(LowercaseNormalizer::new()),
            NormalizerConfig::UnicodeRange {
                range,
                start,
                end,
                replacement,
            } => {
                let code_range = match (range, start, end) {
                    (Some(name), None, None) => CodeRange::named(name)?,
                    (None, Some(start), Some(end)) => CodeRange::new(*start, *end)?,
                    _ => {
                        return Err(NormalizeError::Configuration(
                            "unicode_range needs either `range` or both `start` and `end`"
                                .to_string(),
                        ))
                    }
                };
                Box::new(UnicodeRangeNormalizer::new(code_range, replacement.as_str()))
            }
            NormalizerConfig::Regex {
                pattern,
                replacement,
            } => Box::new(RegexNormalizer::new(pattern, replacement.as_str())?),
            NormalizerConfig::Url { replacement } => {
                Box::new(RegexNormalizer::url(replacement.as_str())?)
            }
            NormalizerConfig::StringSet {
                strings,
                replacement,
            } => Box::new(StringSetNormalizer::new(
                strings.iter().map(String::as_str),
                replacement.as_str(),
            )?),
        };
        Ok(normalizer)
    }
}

impl PipelineConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| NormalizeError::Configuration(format!("Failed to parse TOML: {e}")))
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NormalizeError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            NormalizeError::Configuration(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NormalizeError::Configuration(format!("Failed to serialize TOML: {e}")))
    }

    /// Check the configuration without keeping the built pipeline
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Build a pipeline; the first invalid entry aborts the whole build
    pub fn build(&self) -> Result<Pipeline> {
        let normalizers = self
            .normalizers
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.build().map_err(|e| {
                    log::debug!("Normalizer #{index} rejected: {e}");
                    e
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let tokenizer = self.tokenizer.build()?;
        let pipeline = Pipeline::new(ChainNormalizer::new(normalizers), tokenizer);

        log::debug!(
            "Built pipeline '{}'",
            self.name.as_deref().unwrap_or("unnamed")
        );
        Ok(pipeline)
    }
}
