//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tweetnorm_core::PipelineOutput;

/// JSON formatter - outputs all records as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<RecordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordData {
    /// The input text
    pub text: String,
    /// Text after normalization
    pub normalized: String,
    /// Extracted n-grams in scan order
    pub ngrams: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, text: &str, output: &PipelineOutput) -> Result<()> {
        self.records.push(RecordData {
            text: text.to_string(),
            normalized: output.normalized.clone(),
            ngrams: output.ngrams.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
