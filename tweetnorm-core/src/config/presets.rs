//! Embedded pipeline presets
//!
//! Preset TOML files are compiled into the binary and parsed once on first
//! access.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::PipelineConfig;
use crate::error::{NormalizeError, Result};
use crate::pipeline::Pipeline;

/// Preset name and TOML source, in listing order
const SOURCES: &[(&str, &str)] = &[
    ("tweet", include_str!("../../configs/presets/tweet.toml")),
    ("words", include_str!("../../configs/presets/words.toml")),
];

/// Preset used when nothing else is requested
pub const DEFAULT_PRESET: &str = "tweet";

static EMBEDDED: OnceLock<HashMap<&'static str, PipelineConfig>> = OnceLock::new();

fn embedded() -> &'static HashMap<&'static str, PipelineConfig> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();
        for (name, source) in SOURCES {
            match PipelineConfig::from_toml_str(source) {
                Ok(config) => {
                    map.insert(*name, config);
                }
                Err(e) => {
                    log::warn!("Failed to load preset '{name}': {e}");
                }
            }
        }
        map
    })
}

/// Names of all embedded presets
pub fn names() -> Vec<&'static str> {
    SOURCES.iter().map(|(name, _)| *name).collect()
}

/// Parsed configuration of a preset
pub fn get(name: &str) -> Result<&'static PipelineConfig> {
    embedded()
        .get(name)
        .ok_or_else(|| NormalizeError::UnknownPreset(name.to_string()))
}

/// Raw TOML of a preset, suitable as a template for custom configs
pub fn source(name: &str) -> Result<&'static str> {
    SOURCES
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, source)| *source)
        .ok_or_else(|| NormalizeError::UnknownPreset(name.to_string()))
}

/// Build a fresh pipeline from a preset
pub fn pipeline(name: &str) -> Result<Pipeline> {
    get(name)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Level;

    #[test]
    fn test_all_presets_build() {
        for name in names() {
            assert!(pipeline(name).is_ok(), "preset {name} failed to build");
        }
    }

    #[test]
    fn test_default_preset_exists() {
        assert!(names().contains(&DEFAULT_PRESET));
    }

    #[test]
    fn test_tweet_preset_shape() {
        let pipeline = pipeline("tweet").unwrap();
        assert_eq!(
            pipeline.chain().names(),
            vec!["lowercase", "unicode_range", "url", "string_set"]
        );
        assert_eq!(pipeline.tokenizer().window_size(), 2);
        assert_eq!(pipeline.tokenizer().level(), Level::Character);
    }

    #[test]
    fn test_words_preset_shape() {
        let config = get("words").unwrap();
        assert_eq!(config.name.as_deref(), Some("words"));
        assert_eq!(config.tokenizer.level, "word");
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            get("legal"),
            Err(NormalizeError::UnknownPreset(name)) if name == "legal"
        ));
        assert!(source("legal").is_err());
    }

    #[test]
    fn test_source_parses_back() {
        let raw = source("tweet").unwrap();
        assert!(raw.contains("[[normalizers]]"));
        assert!(PipelineConfig::from_toml_str(raw).is_ok());
    }
}
