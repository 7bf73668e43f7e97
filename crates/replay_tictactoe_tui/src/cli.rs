//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand, ValueEnum};
use replay_tictactoe::SortOrder;
use std::path::PathBuf;

/// Tic-tac-toe with move history and replay
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a time-travel move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (ignored if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Move-list order, overriding the settings file
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
    },

    /// Apply a scripted move list and print the resulting view
    Replay {
        /// Cells to play, comma separated (0-8 or labels such as top-left)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<String>,

        /// Step to display after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Move-list order, overriding the settings file
        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { order: None }
    }
}

/// Move-list order as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderArg {
    /// Oldest move first
    Asc,
    /// Newest move first
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}
