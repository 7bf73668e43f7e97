//! One recorded board state in the game history.

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// An immutable board plus the position that was played to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    move_to: Option<Position>,
}

impl Snapshot {
    /// The all-empty starting snapshot.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            move_to: None,
        }
    }

    /// A snapshot reached by playing at `move_to`.
    pub fn after(board: Board, move_to: Position) -> Self {
        Self {
            board,
            move_to: Some(move_to),
        }
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position played to reach this step; `None` at game start.
    pub fn move_to(&self) -> Option<Position> {
        self.move_to
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
