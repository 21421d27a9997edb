//! Checkers CLI - Command-line interface
//!
//! Commands:
//! - play: interactive two-player game at the terminal

use clap::{Parser, Subcommand};

mod play;
mod render;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Bitboard checkers for two players at one terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
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
