//! Errors reported by the game engine.
//!
//! The default engine entry points ignore illegal input silently; these
//! types are what the explicit variants return instead.

use super::{Player, Position};
use derive_more::{Display, Error, From};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// The displayed board already has a winning line.
    #[display("Game is already won by {}", _0)]
    GameWon(#[error(not(source))] Player),
    /// The displayed board is full.
    #[display("Game is already drawn")]
    GameDrawn,
    /// The target square holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}

/// A jump targeted a step that is not in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Step {} is out of range (history has {} steps)", step, len)]
pub struct StepOutOfRange {
    /// The requested step.
    pub step: usize,
    /// Number of snapshots in the history.
    pub len: usize,
}

/// Any command rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// A move was rejected.
    #[display("{}", _0)]
    Move(MoveRejection),
    /// A jump was rejected.
    #[display("{}", _0)]
    Jump(StepOutOfRange),
}
