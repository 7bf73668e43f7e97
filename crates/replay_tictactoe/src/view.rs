//! Read-only view model for presentation.
//!
//! Everything here is recomputed from [`crate::GameState`] on demand and
//! never stored back into it.

use super::rules::Line;
use super::snapshot::Snapshot;
use super::{Board, Player, SortOrder};
use derive_getters::Getters;
use serde::Serialize;

/// Status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// A line is complete; holds the mark on that line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Every square is filled and no line is complete.
    #[display("Draw")]
    Draw,
    /// The game continues; holds the player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct MoveDescription {
    /// History step this entry jumps to.
    step: usize,
    /// Human-readable label.
    label: String,
    /// Whether this is the displayed step.
    is_current: bool,
}

impl MoveDescription {
    /// Label for the entry that jumps to `snapshot`.
    ///
    /// Columns and rows are counted from 1.
    pub fn label_for(snapshot: &Snapshot) -> String {
        match snapshot.move_to() {
            None => "Go to game start".to_string(),
            Some(pos) => format!("Go to move col:{} row:{}", pos.col() + 1, pos.row() + 1),
        }
    }
}

/// Snapshot of everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// The displayed board.
    board: Board,
    /// Line to emphasize, if the displayed board is won.
    winning_line: Option<Line>,
    /// Status of the displayed board.
    status: Status,
    /// Rendered status line.
    status_text: String,
    /// Move list in display order.
    moves: Vec<MoveDescription>,
    /// Displayed step.
    current_step: usize,
    /// Move list ordering.
    sort_order: SortOrder,
}

impl GameView {
    /// Assembles a view; the status text is derived from `status`.
    pub fn new(
        board: Board,
        winning_line: Option<Line>,
        status: Status,
        moves: Vec<MoveDescription>,
        current_step: usize,
        sort_order: SortOrder,
    ) -> Self {
        Self {
            board,
            winning_line,
            status,
            status_text: status.to_string(),
            moves,
            current_step,
            sort_order,
        }
    }

    /// Whether `pos` lies on the winning line.
    pub fn is_highlighted(&self, pos: crate::Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Position};

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(Status::Draw.to_string(), "Draw");
        assert_eq!(Status::NextPlayer(Player::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_labels() {
        assert_eq!(MoveDescription::label_for(&Snapshot::initial()), "Go to game start");
        let snapshot = Snapshot::after(
            Board::new().with_mark(Position::MiddleRight, Player::X),
            Position::MiddleRight,
        );
        assert_eq!(MoveDescription::label_for(&snapshot), "Go to move col:3 row:2");
    }

    #[test]
    fn test_descending_reverses_and_flags_current() {
        let mut game = GameState::new();
        game.apply_move(Position::TopLeft);
        game.apply_move(Position::BottomCenter);
        game.jump_to(1).unwrap();
        game.set_sort_order(SortOrder::Descending);

        let view = game.view();
        let steps: Vec<_> = view.moves().iter().map(|m| *m.step()).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert_eq!(view.moves()[0].label(), "Go to move col:2 row:3");

        let current: Vec<_> = view.moves().iter().filter(|m| *m.is_current()).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(*current[0].step(), 1);
    }

    #[test]
    fn test_highlight_follows_winning_line() {
        let mut game = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ] {
            game.apply_move(pos);
        }
        let view = game.view();
        assert_eq!(view.status_text(), "Winner: X");
        assert!(view.is_highlighted(Position::TopCenter));
        assert!(!view.is_highlighted(Position::Center));
    }
}
