//! Process command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::pipeline_source::{PipelineSource, TokenizerOverrides};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tweetnorm_core::presets;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); one text per line
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Literal text to process (repeatable); stdin is read when no input is given
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Embedded pipeline preset
    #[arg(short, long, value_name = "NAME", conflicts_with = "config")]
    pub preset: Option<String>,

    /// Pipeline configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the n-gram window size
    #[arg(short, long, value_name = "N")]
    pub window: Option<usize>,

    /// Override the tokenization level (word or character)
    #[arg(short, long, value_name = "LEVEL")]
    pub level: Option<String>,

    /// Also print each normalized text
    #[arg(long)]
    pub show_normalized: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated n-grams, one line per text
    Text,
    /// JSON array of records with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let pipeline = self.pipeline_source().build(&self.overrides())?;

        let batches = self.read_inputs()?;
        let total: usize = batches.iter().map(|batch| batch.texts.len()).sum();
        if total == 0 {
            return Err(CliError::EmptyInput.into());
        }

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.create_formatter(writer);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(batches.iter().filter(|b| b.source.is_some()).count() as u64);

        for batch in &batches {
            for text in &batch.texts {
                formatter.format_record(text, &pipeline.process(text))?;
            }
            if let Some(source) = &batch.source {
                progress.file_completed(source, batch.texts.len());
            }
        }

        progress.finish();
        formatter.finish()?;

        log::info!("Processed {total} texts");
        Ok(())
    }

    /// Resolve where the pipeline configuration comes from
    pub fn pipeline_source(&self) -> PipelineSource {
        match (&self.config, &self.preset) {
            (Some(path), _) => PipelineSource::External(path.clone()),
            (None, Some(name)) => PipelineSource::Preset(name.clone()),
            (None, None) => PipelineSource::Preset(presets::DEFAULT_PRESET.to_string()),
        }
    }

    fn overrides(&self) -> TokenizerOverrides {
        TokenizerOverrides {
            window_size: self.window,
            level: self.level.clone(),
        }
    }

    fn create_formatter(&self, writer: Box<dyn Write + Send + Sync>) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, self.show_normalized)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => {
                Box::new(MarkdownFormatter::new(writer, self.show_normalized))
            }
        }
    }

    /// Collect every text to process, in order, before any output is written
    fn read_inputs(&self) -> Result<Vec<InputBatch>> {
        if !self.text.is_empty() {
            return Ok(vec![InputBatch {
                source: None,
                texts: self.text.clone(),
            }]);
        }

        if self.input.is_empty() {
            let content = FileReader::read_all(io::stdin().lock())?;
            return Ok(vec![InputBatch::from_content(None, &content)]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} files", files.len());

        files
            .iter()
            .map(|path| {
                let content = FileReader::read_text(path)?;
                Ok(InputBatch::from_content(
                    Some(path.display().to_string()),
                    &content,
                ))
            })
            .collect()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            if let Err(e) = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init()
            {
                log::warn!("Logging not reconfigured: {e}");
            }
        }
    }
}

/// Texts read from one input source
struct InputBatch {
    source: Option<String>,
    texts: Vec<String>,
}

impl InputBatch {
    /// One text per non-blank line of `content`
    fn from_content(source: Option<String>, content: &str) -> Self {
        Self {
            source,
            texts: FileReader::texts(content)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
