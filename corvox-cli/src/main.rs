//! corvox command-line entry point

use anyhow::Result;
use clap::Parser;
use corvox_cli::commands::Commands;

/// Extract clean, speakable sentences from noisy source text
#[derive(Debug, Parser)]
#[command(name = "corvox", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
