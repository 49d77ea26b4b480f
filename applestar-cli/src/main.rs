//! Applestar CLI - Command-line interface
//!
//! Commands:
//! - play: resolve a launch configuration and run one match

use clap::{Parser, Subcommand};

mod play;

#[derive(Parser)]
#[command(name = "applestar")]
#[command(about = "Applestar - StarCraft II RL match launcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a launch configuration and play one match
    Play(play::PlayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
    }
}
