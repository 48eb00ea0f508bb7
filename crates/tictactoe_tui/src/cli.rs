//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Position;

/// Tic-tac-toe on an N×N board
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on a board of any size", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Board size; starts the game immediately when given
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,
    },

    /// Apply a scripted list of moves and print the result
    Play {
        /// Board size (defaults to the configured size)
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Moves as row,col pairs, alternating players starting with Player 1
        moves: Vec<Position>,
    },
}
