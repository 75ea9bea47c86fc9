//! File and stdin reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of a reader (usually stdin) as UTF-8 text
    pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Split content into one text per non-blank line
    pub fn texts(content: &str) -> Vec<&str> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}
