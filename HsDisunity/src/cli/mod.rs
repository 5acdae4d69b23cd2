//! `HsDisunity` CLI - command-line interface for Unity bundle extraction

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;
use tracing::Level;

#[derive(Parser)]
#[command(name = "hsdisunity")]
#[command(about = "HsDisunity: Unity asset bundle and Hearthstone card art extraction", long_about = None)]
#[command(version)]
struct Cli {
    /// Log per-header and per-object detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the `HsDisunity` CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stderr keeps progress output on stdout readable
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute()?;

    Ok(())
}
