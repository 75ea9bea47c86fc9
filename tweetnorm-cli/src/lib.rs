//! tweetnorm CLI library
//!
//! This library provides the command-line interface for the tweetnorm
//! normalization and n-gram pipeline.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline_source;
pub mod progress;

pub use error::{CliError, CliResult};
