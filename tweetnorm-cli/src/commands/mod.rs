//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};
use tweetnorm_core::{presets, CodeRange};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize texts and extract n-grams
    Process(process::ProcessArgs),

    /// Check a pipeline configuration file
    Validate(validate::ValidateArgs),

    /// Write a pipeline configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded pipeline presets
    Presets,

    /// List available output formats
    Formats,

    /// List named code ranges
    Ranges,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.write_to(&mut io::stdout().lock()),
        }
    }
}

impl ListCommands {
    /// Write the requested listing
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            ListCommands::Presets => {
                for name in presets::names() {
                    let description = presets::get(name)?
                        .description
                        .clone()
                        .unwrap_or_default();
                    writeln!(writer, "{name:<8} {description}")?;
                }
            }
            ListCommands::Formats => {
                writeln!(writer, "text     tab-separated n-grams (tabs escaped), one line per text")?;
                writeln!(writer, "json     array of {{text, normalized, ngrams}} records")?;
                writeln!(writer, "markdown numbered list with n-gram summary")?;
            }
            ListCommands::Ranges => {
                for name in CodeRange::NAMES {
                    let range = CodeRange::named(name)?;
                    writeln!(
                        writer,
                        "{name:<18} U+{:04X}..=U+{:04X}",
                        range.start(),
                        range.end()
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(command: ListCommands) -> String {
        let mut buffer = Vec::new();
        command.write_to(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_list_presets() {
        let output = listing(ListCommands::Presets);
        assert!(output.contains("tweet"));
        assert!(output.contains("words"));
    }

    #[test]
    fn test_list_formats() {
        let output = listing(ListCommands::Formats);
        assert!(output.contains("text"));
        assert!(output.contains("json"));
        assert!(output.contains("markdown"));
    }

    #[test]
    fn test_list_ranges() {
        let output = listing(ListCommands::Ranges);
        assert!(output.contains("emoticons"));
        assert!(output.contains("U+1F600..=U+1F64F"));
        assert!(output.contains("U+1F680..=U+1F6FF"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Presets,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Presets"));
    }
}
