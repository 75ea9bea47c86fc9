//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tweetnorm_core::presets;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Preset to use as the starting point
    #[arg(short, long, value_name = "NAME", default_value = presets::DEFAULT_PRESET)]
    pub preset: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating pipeline configuration template...");
        println!("  Preset: {}", self.preset);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the normalizers and tokenizer settings");
        println!("2. Validate your configuration:");
        println!("   tweetnorm validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   tweetnorm process -i tweets.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let source = presets::source(&self.preset)?;
        Ok(format!(
            "{}\n{}",
            TEMPLATE_HEADER.trim_start(),
            source.trim_start()
        ))
    }
}

const TEMPLATE_HEADER: &str = r##"
# Pipeline configuration
#
# Normalizers run top to bottom, each on the previous output.
# Available types:
#   { type = "lowercase" }
#   { type = "unicode_range", range = "emoticons" | "transport_and_map", replacement = "" }
#   { type = "unicode_range", start = 0x2600, end = 0x26FF, replacement = "" }
#   { type = "url", replacement = "" }
#   { type = "regex", pattern = "\\d+", replacement = "<num>" }
#   { type = "string_set", strings = ["#", "@"], replacement = "" }
#
# [tokenizer] takes `window_size` (at least 1) and `level` ("word" or "character").
"##;
