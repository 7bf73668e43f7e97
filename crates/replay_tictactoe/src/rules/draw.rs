//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if every square is occupied.
///
/// This does not look for a winning line: a full board can also hold a
/// win, so callers must check [`super::find_winning_line`] first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::find_winning_line;
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / O O X / X X O
        use Player::{O, X};
        let squares = [X, O, X, O, O, X, X, X, O].map(Square::Occupied);
        let board = Board::from_squares(squares);
        assert!(is_draw(&board));
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_full_board_with_line_still_full() {
        use Player::{O, X};
        let squares = [X, X, X, O, O, X, X, O, O].map(Square::Occupied);
        let board = Board::from_squares(squares);
        assert!(is_draw(&board));
        assert!(find_winning_line(&board).is_some());
    }
}
