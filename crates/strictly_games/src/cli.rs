//! Command-line interface for strictly_games.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// Strictly Games - perfect-play tic-tac-toe solver
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Solve tic-tac-toe positions with exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the solver config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "strictly_games.toml")]
    pub config: std::path::PathBuf,

    /// Report format, overriding the config file
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a board and print the optimal action
    Solve {
        /// Board as nine squares in row-major order, e.g. "X.O/.X./..O"
        board: String,
    },

    /// Play a game out with both sides using the solver
    Selfplay {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        from: Option<String>,
    },
}
