//! Application state and key handling.
//!
//! [`App`] wraps the engine with the presentation-only state the terminal
//! needs: the board cursor, which panel has focus, and the highlighted
//! entry of the move list.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use replay_tictactoe::{GameState, GameView, Position, SortOrder};
use tracing::{debug, instrument};

/// Panel receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggled(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection marker, in display order.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: GameState::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// The underlying game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The view model to draw.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Cell under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus = self.focus.toggled(),
            KeyCode::Char('a') => self.set_sort_order(SortOrder::Ascending),
            KeyCode::Char('d') => self.set_sort_order(SortOrder::Descending),
            KeyCode::Char('s') => self.set_sort_order(self.game.sort_order().toggled()),
            KeyCode::Char(c) if digit_position(c).is_some() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.game.latest_step();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter => self.jump_selected(),
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        self.game.apply_move(pos);
        self.sync_selection();
    }

    fn jump_selected(&mut self) {
        let step = self.step_at_row(self.selected);
        // Rows always map onto existing steps, so the jump cannot fail.
        if let Err(error) = self.game.jump_to(step) {
            debug!(%error, "Jump ignored");
        }
    }

    fn set_sort_order(&mut self, order: SortOrder) {
        let step = self.step_at_row(self.selected);
        self.game.set_sort_order(order);
        self.selected = self.row_of_step(step);
    }

    /// Points the selection at the displayed step.
    fn sync_selection(&mut self) {
        self.selected = self.row_of_step(self.game.current_step());
    }

    fn row_of_step(&self, step: usize) -> usize {
        if self.game.sort_order().is_descending() {
            self.game.latest_step() - step
        } else {
            step
        }
    }

    fn step_at_row(&self, row: usize) -> usize {
        // The mapping is its own inverse.
        self.row_of_step(row.min(self.game.latest_step()))
    }
}
