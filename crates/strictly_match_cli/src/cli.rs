//! Command-line interface for strictly_match.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Match - play tic-tac-toe against the computer, first to three rounds
#[derive(Parser, Debug)]
#[command(name = "strictly_match")]
#[command(about = "Play a tic-tac-toe match against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the shell configuration file
    #[arg(short, long, default_value = "strictly_match.toml")]
    pub config: PathBuf,

    /// Seed for the computer's random fallback moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not clear the terminal between turns
    #[arg(long)]
    pub no_clear: bool,
}
