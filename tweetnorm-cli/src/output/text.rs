//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tweetnorm_core::PipelineOutput;

/// Plain text formatter - one tab-separated line of n-grams per input text
///
/// Backslashes, tabs and line breaks inside a field are written as `\\`,
/// `\t`, `\n` and `\r` so every line splits back into the original n-grams.
pub struct TextFormatter<W: Write> {
    writer: W,
    show_normalized: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_normalized: bool) -> Self {
        Self {
            writer,
            show_normalized,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, _text: &str, output: &PipelineOutput) -> Result<()> {
        if self.show_normalized {
            writeln!(self.writer, "{}", escape_field(&output.normalized))?;
        }
        let fields: Vec<String> = output.ngrams.iter().map(|g| escape_field(g)).collect();
        writeln!(self.writer, "{}", fields.join("\t"))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for ch in field.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
