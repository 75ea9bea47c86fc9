//! tweetnorm command-line entry point

use anyhow::Result;
use clap::Parser;
use tweetnorm_cli::commands::Commands;

/// Normalize short social-media text and extract n-grams
#[derive(Debug, Parser)]
#[command(name = "tweetnorm", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
