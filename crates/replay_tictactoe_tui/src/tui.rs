//! Interactive terminal loop.

use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use replay_tictactoe::SortOrder;
use std::time::Duration;
use tracing::{info, instrument};

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument]
pub fn run(sort_order: SortOrder) -> Result<()> {
    info!("Starting terminal UI");

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, App::new(sort_order));
    ratatui::restore();

    info!("Terminal UI closed");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
