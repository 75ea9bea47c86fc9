//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tweetnorm_core::PipelineConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to pipeline configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating pipeline configuration: {}", self.config.display());

        // Building the pipeline compiles every pattern and checks the tokenizer
        match PipelineConfig::from_file(&self.config).and_then(|config| {
            let pipeline = config.build()?;
            Ok((config, pipeline))
        }) {
            Ok((config, pipeline)) => {
                println!("✓ Configuration is valid!");
                if let Some(name) = &config.name {
                    println!("  Name: {name}");
                }
                println!("  Normalizers: {}", pipeline.chain().len());
                println!("  Pipeline: {}", pipeline.describe());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
name = "test"

[[normalizers]]
type = "lowercase"

[[normalizers]]
type = "url"

[tokenizer]
window_size = 3
level = "character"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_pattern() {
        let toml_content = r#"
[[normalizers]]
type = "regex"
pattern = "([a-z]"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_unknown_level() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[tokenizer]\nlevel = \"paragraph\"\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Unsupported level: paragraph"));
    }
}
