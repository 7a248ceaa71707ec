//! Command-line interface for algo_arcade.

use arcade::GameKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Algo Arcade - algorithm puzzles scored by a remote service
#[derive(Parser, Debug)]
#[command(name = "algo_arcade")]
#[command(about = "Algorithm puzzle arcade client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scoring service URL (overrides config and ARCADE_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the snake-and-ladder leaderboard
    Leaderboard,

    /// Show eight-queens discovery statistics
    Stats,

    /// Show algorithm timing comparison for a game
    Compare {
        /// snakeladder, traffic, tsp, hanoi or eight-queens
        game: GameKind,
    },

    /// Draw an empty snake-and-ladder grid
    Board {
        /// Side length (6-12)
        #[arg(short, long, default_value = "10")]
        size: u8,
    },

    /// Draw the starting Hanoi stacks
    Pegs {
        /// 3 or 4
        #[arg(short, long, default_value = "3")]
        pegs: u8,

        /// Disks on peg A
        #[arg(short, long, default_value = "5")]
        disks: u8,
    },
}
