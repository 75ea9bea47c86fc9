//! Output formatting module

use anyhow::Result;
use tweetnorm_core::PipelineOutput;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for one input text
    fn format_record(&mut self, text: &str, output: &PipelineOutput) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
