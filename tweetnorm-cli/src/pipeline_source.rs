//! Pipeline source management for CLI

use crate::error::CliError;
use anyhow::Result;
use std::path::PathBuf;
use tweetnorm_core::{presets, Pipeline, PipelineConfig};

/// Source of the pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineSource {
    /// Embedded preset
    Preset(String),
    /// External TOML configuration file
    External(PathBuf),
}

/// Tokenizer settings given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizerOverrides {
    /// Replacement window size
    pub window_size: Option<usize>,
    /// Replacement level name
    pub level: Option<String>,
}

impl PipelineSource {
    /// Get the display name for the pipeline source
    pub fn display_name(&self) -> String {
        match self {
            PipelineSource::Preset(name) => format!("Preset: {name}"),
            PipelineSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the configuration without building it
    pub fn load_config(&self) -> Result<PipelineConfig> {
        let config = match self {
            PipelineSource::Preset(name) => presets::get(name)
                .map_err(|e| CliError::ConfigError(e.to_string()))?
                .clone(),
            PipelineSource::External(path) => PipelineConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
        };
        Ok(config)
    }

    /// Load, apply overrides and build the pipeline
    pub fn build(&self, overrides: &TokenizerOverrides) -> Result<Pipeline> {
        let mut config = self.load_config()?;

        if let Some(window_size) = overrides.window_size {
            config.tokenizer.window_size = window_size;
        }
        if let Some(level) = &overrides.level {
            config.tokenizer.level = level.clone();
        }

        let pipeline = config
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        log::info!("{} ({})", self.display_name(), pipeline.describe());
        Ok(pipeline)
    }
}
