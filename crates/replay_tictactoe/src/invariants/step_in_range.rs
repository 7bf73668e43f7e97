//! Current step invariant: the displayed step exists.

use super::Invariant;
use crate::GameState;

/// Invariant: `0 <= current_step < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step points into the history"
    }
}
