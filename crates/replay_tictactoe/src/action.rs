//! Commands accepted by the game engine.
//!
//! Inputs from the presentation layer are first-class values so they can
//! be logged, scripted and fed through the pure [`crate::reduce`] function.

use super::Position;
use serde::{Deserialize, Serialize};

/// Order in which the move list is presented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest step first.
    #[default]
    #[display("ASC")]
    Ascending,
    /// Newest step first.
    #[display("DESC")]
    Descending,
}

impl SortOrder {
    /// Builds an order from a "descending" flag.
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    /// Returns true for [`SortOrder::Descending`].
    pub fn is_descending(self) -> bool {
        self == SortOrder::Descending
    }

    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// An input event for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Command {
    /// Place the next player's mark at a position.
    #[display("play {}", _0)]
    Play(Position),
    /// Show the board as it was at a history step.
    #[display("jump to step {}", _0)]
    JumpTo(usize),
    /// Change the order of the move list.
    #[display("sort {}", _0)]
    SetSortOrder(SortOrder),
}
