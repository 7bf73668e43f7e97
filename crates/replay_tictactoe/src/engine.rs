//! Game state engine with history and time travel.
//!
//! [`GameState`] owns the full history of board snapshots and a pointer to
//! the step currently displayed. Whose turn it is never gets stored: it is
//! read from the parity of the current step.

use super::action::{Command, SortOrder};
use super::error::{EngineError, MoveRejection, StepOutOfRange};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::rules::{Line, find_winning_line, is_draw, winner};
use super::snapshot::Snapshot;
use super::view::{GameView, MoveDescription, Status};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete game state: history, displayed step and list ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct GameState {
    history: Vec<Snapshot>,
    current_step: usize,
    sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list ordering.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_step: 0,
            sort_order,
        }
    }

    /// Every recorded snapshot, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the newest snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Current move-list ordering.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The displayed snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Player to move from the displayed step.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.current_step)
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<Line> {
        find_winning_line(self.current_board())
    }

    /// Status of the displayed board.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> Status {
        let board = self.current_board();
        if let Some(player) = winner(board) {
            Status::Winner(player)
        } else if is_draw(board) {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_player())
        }
    }

    /// Returns true once the displayed board is won or full.
    pub fn is_decided(&self) -> bool {
        !matches!(self.status(), Status::NextPlayer(_))
    }

    /// Checks whether a move at `pos` would be accepted, without applying it.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn check_move(&self, pos: Position) -> Result<(), MoveRejection> {
        let board = self.current_board();

        if let Some(player) = winner(board) {
            return Err(MoveRejection::GameWon(player));
        }

        if is_draw(board) {
            return Err(MoveRejection::GameDrawn);
        }

        if !board.is_empty(pos) {
            return Err(MoveRejection::SquareOccupied(pos));
        }

        Ok(())
    }

    /// Plays the next player's mark at `pos`, reporting why a move was ignored.
    ///
    /// Any snapshots after the displayed step are discarded before the new
    /// one is appended.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn try_apply_move(&mut self, pos: Position) -> Result<(), MoveRejection> {
        self.check_move(pos)?;

        let player = self.next_player();
        let board = self.current_board().with_mark(pos, player);
        let discarded = self.latest_step() - self.current_step;

        self.history.truncate(self.current_step + 1);
        self.history.push(Snapshot::after(board, pos));
        self.current_step = self.latest_step();

        info!(
            %player,
            position = %pos,
            step = self.current_step,
            discarded,
            "Move applied"
        );
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Move broke a game invariant"
        );
        Ok(())
    }

    /// Plays the next player's mark at `pos`.
    ///
    /// Illegal moves (game decided, square occupied) are ignored and leave
    /// the state unchanged. Use [`GameState::try_apply_move`] to learn why.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position) {
        if let Err(rejection) = self.try_apply_move(pos) {
            debug!(%rejection, "Move ignored");
        }
    }

    /// Displays the board as it was at `step`.
    ///
    /// History is never truncated by a jump. A step outside the history is
    /// rejected and the state stays as it was.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StepOutOfRange> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Jump target outside history");
            return Err(StepOutOfRange { step, len });
        }

        self.current_step = step;
        debug!(step, "Jumped");
        Ok(())
    }

    /// Sets the move-list ordering. History and step are untouched.
    #[instrument(skip(self))]
    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
    }

    /// Applies a command in place.
    pub fn dispatch(&mut self, command: Command) -> Result<(), EngineError> {
        match command {
            Command::Play(pos) => self.try_apply_move(pos)?,
            Command::JumpTo(step) => self.jump_to(step)?,
            Command::SetSortOrder(order) => self.set_sort_order(order),
        }
        Ok(())
    }

    /// One description per history step, in the current sort order.
    pub fn move_descriptions(&self) -> Vec<MoveDescription> {
        let mut moves: Vec<_> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                MoveDescription::new(
                    step,
                    MoveDescription::label_for(snapshot),
                    step == self.current_step,
                )
            })
            .collect();

        if self.sort_order.is_descending() {
            moves.reverse();
        }
        moves
    }

    /// Everything presentation needs to draw the game.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::new(
            *self.current_board(),
            self.winning_line(),
            self.status(),
            self.move_descriptions(),
            self.current_step,
            self.sort_order,
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure transition function: returns the state after `command`.
///
/// Rejected commands return the input state unchanged.
#[instrument(skip(state))]
pub fn reduce(mut state: GameState, command: Command) -> GameState {
    if let Err(error) = state.dispatch(command) {
        debug!(%error, "Command ignored");
    }
    state
}

/// Unvalidated wire form of [`GameState`].
#[derive(Debug, Clone, Deserialize)]
pub struct GameRecord {
    history: Vec<Snapshot>,
    current_step: usize,
    #[serde(default)]
    sort_order: SortOrder,
}

/// Deserialized state failed validation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game record: {}", reasons)]
pub struct InvalidRecord {
    /// Descriptions of every violated invariant, joined by `; `.
    pub reasons: String,
}

impl From<Vec<InvariantViolation>> for InvalidRecord {
    fn from(violations: Vec<InvariantViolation>) -> Self {
        let reasons = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self { reasons }
    }
}

impl TryFrom<GameRecord> for GameState {
    type Error = InvalidRecord;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let state = GameState {
            history: record.history,
            current_step: record.current_step,
            sort_order: record.sort_order,
        };
        GameInvariants::check_all(&state)?;
        Ok(state)
    }
}

#[cfg(test)]
impl GameState {
    /// Builds a state without validation, for invariant tests.
    pub(crate) fn from_parts_unchecked(history: Vec<Snapshot>, current_step: usize) -> Self {
        Self {
            history,
            current_step,
            sort_order: SortOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    fn play(moves: &[Position]) -> GameState {
        let mut game = GameState::new();
        for &pos in moves {
            game.try_apply_move(pos).expect("legal move");
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.status(), Status::NextPlayer(Player::X));
        assert_eq!(game.current_snapshot().move_to(), None);
    }

    #[test]
    fn test_players_alternate() {
        let game = play(&[Center, TopLeft]);
        assert_eq!(game.current_board().get(Center).player(), Some(Player::X));
        assert_eq!(game.current_board().get(TopLeft).player(), Some(Player::O));
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = play(&[Center]);
        let before = game.clone();
        assert_eq!(
            game.try_apply_move(Center),
            Err(MoveRejection::SquareOccupied(Center))
        );
        game.apply_move(Center);
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = play(&[TopLeft, Center, TopCenter, MiddleLeft, TopRight]);
        assert_eq!(
            game.check_move(BottomRight),
            Err(MoveRejection::GameWon(Player::X))
        );
        let before = game.clone();
        game.apply_move(BottomRight);
        assert_eq!(game, before);
        assert!(game.is_decided());
    }

    #[test]
    fn test_no_moves_after_draw() {
        let mut game = play(&[
            TopLeft,
            TopRight,
            TopCenter,
            MiddleLeft,
            MiddleRight,
            Center,
            BottomLeft,
            BottomCenter,
            BottomRight,
        ]);
        assert_eq!(game.status(), Status::Draw);
        // A full board reports the draw before the occupied square.
        assert_eq!(
            game.try_apply_move(Center),
            Err(MoveRejection::GameDrawn)
        );
        let before = game.clone();
        game.apply_move(Center);
        assert_eq!(game, before);
        assert_eq!(game.view().status_text(), "Draw");
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = play(&[TopLeft, Center, TopCenter]);
        game.jump_to(1).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_step(), 1);
        assert_eq!(game.next_player(), Player::O);
        game.jump_to(3).unwrap();
        assert_eq!(game.current_step(), 3);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = play(&[TopLeft]);
        assert_eq!(game.jump_to(2), Err(StepOutOfRange { step: 2, len: 2 }));
        assert_eq!(game.current_step(), 1);
    }

    #[test]
    fn test_move_after_jump_branches() {
        let mut game = play(&[TopLeft, Center, TopCenter, MiddleLeft]);
        game.jump_to(2).unwrap();
        game.try_apply_move(BottomRight).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_step(), 3);
        assert_eq!(game.current_snapshot().move_to(), Some(BottomRight));
        assert!(game.current_board().is_empty(TopCenter));
    }

    #[test]
    fn test_sort_order_does_not_touch_history() {
        let mut game = play(&[TopLeft, Center]);
        game.jump_to(1).unwrap();
        let history = game.history().to_vec();
        game.set_sort_order(SortOrder::Descending);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.current_step(), 1);
        assert_eq!(game.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_reduce_is_pure() {
        let game = play(&[Center]);
        let next = reduce(game.clone(), Command::Play(Center));
        assert_eq!(next, game);

        let next = reduce(game.clone(), Command::JumpTo(0));
        assert_eq!(next.current_step(), 0);
        assert_eq!(game.current_step(), 1);
    }

    #[test]
    fn test_dispatch_reports_errors() {
        let mut game = GameState::new();
        assert_eq!(
            game.dispatch(Command::JumpTo(5)),
            Err(EngineError::Jump(StepOutOfRange { step: 5, len: 1 }))
        );
        assert!(game.dispatch(Command::Play(Center)).is_ok());
        assert_eq!(
            game.dispatch(Command::Play(Center)),
            Err(EngineError::Move(MoveRejection::SquareOccupied(Center)))
        );
    }
}
