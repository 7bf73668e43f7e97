//! Tic-tac-toe with move history - unified CLI

use anyhow::Result;
use clap::Parser;
use replay_tictactoe_tui::{Cli, Command, Settings, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { order } => {
            let settings = settings.with_sort_order(order.map(Into::into));
            logging::init_file_logging(&settings)?;
            tui::run(*settings.sort_order())
        }
        Command::Replay {
            moves,
            jump,
            order,
            json,
        } => {
            let settings = settings.with_sort_order(order.map(Into::into));
            logging::init_stderr_logging(&settings);
            info!(moves = moves.len(), ?jump, "Replaying moves");
            let output = replay::run(&moves, jump, *settings.sort_order(), json)?;
            println!("{}", output);
            Ok(())
        }
    }
}
