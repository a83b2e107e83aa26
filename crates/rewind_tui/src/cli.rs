//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "REWIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a scripted sequence of cells and print the result
    Print {
        /// Comma-separated cell indices (0-8), e.g. "0,4,1"
        #[arg(value_delimiter = ',')]
        cells: Vec<usize>,

        /// Jump to this history entry after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
