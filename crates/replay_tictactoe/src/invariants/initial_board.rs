//! Initial board invariant: history starts at the empty board.

use super::Invariant;
use crate::GameState;

/// Invariant: step 0 is the empty board with no move recorded.
pub struct InitialBoardInvariant;

impl Invariant<GameState> for InitialBoardInvariant {
    fn holds(game: &GameState) -> bool {
        match game.history().first() {
            Some(first) => first.board().occupied() == 0 && first.move_to().is_none(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts at the empty board"
    }
}
