//! History consistency invariant: each step adds exactly one legal mark.

use super::Invariant;
use crate::rules::{find_winning_line, is_draw};
use crate::{GameState, Player, Square};

/// Invariant: every snapshot after the first differs from its predecessor
/// in exactly one square.
///
/// That square is the recorded move-to position, it was empty before, and
/// it now holds the mark of the player whose turn it was. No snapshot
/// follows a board that was already won or full.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let Some(pos) = pair[1].move_to() else {
                    return false;
                };

                let decided = find_winning_line(before).is_some() || is_draw(before);
                !decided
                    && before.diff(after) == [pos]
                    && before.get(pos) == Square::Empty
                    && after.get(pos) == Square::Occupied(Player::to_move_at(step))
            })
    }

    fn description() -> &'static str {
        "Each step adds one mark for the player to move"
    }
}
