//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tweetnorm_core::PipelineOutput;

/// Markdown formatter - outputs each record as a numbered list item
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    show_normalized: bool,
    record_count: usize,
    ngram_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, show_normalized: bool) -> Self {
        Self {
            writer,
            show_normalized,
            record_count: 0,
            ngram_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, text: &str, output: &PipelineOutput) -> Result<()> {
        self.record_count += 1;
        self.ngram_count += output.ngrams.len();

        writeln!(self.writer, "{}. {}", self.record_count, text.trim())?;
        if self.show_normalized {
            writeln!(self.writer, "   - normalized: `{}`", output.normalized)?;
        }
        let ngrams: Vec<String> = output.ngrams.iter().map(|n| format!("`{n}`")).collect();
        writeln!(self.writer, "   - n-grams: {}", ngrams.join(", "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total texts: {}, n-grams: {}*",
            self.record_count, self.ngram_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
