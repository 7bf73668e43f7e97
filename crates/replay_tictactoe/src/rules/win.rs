//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// The eight aligned lines, in the order they are checked.
///
/// Rows first, then columns, then the two diagonals. When several lines are
/// aligned at once the earliest one in this order is reported.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line whose three squares hold the same mark.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        !sq.is_empty() && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the player owning the first winning line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    find_winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}
