//! Replay Tic-Tac-Toe - game logic with move history and time travel
//!
//! The engine keeps every board the game has passed through. A front end
//! can show any earlier step, and playing from an earlier step replaces the
//! moves that followed it.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation of a single board
//! - **Engine**: [`GameState`] owns the history, the displayed step and the
//!   move-list ordering
//! - **View**: [`GameView`], the read-only model a front end draws
//!
//! # Example
//!
//! ```
//! use replay_tictactoe::{GameState, Position};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     game.apply_move(pos);
//! }
//! game.jump_to(1).unwrap();
//! assert_eq!(game.view().status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;
mod view;

pub use action::{Command, SortOrder};
pub use engine::{GameState, InvalidRecord, reduce};
pub use error::{EngineError, MoveRejection, StepOutOfRange};
pub use position::Position;
pub use rules::{Line, find_winning_line, is_draw};
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveDescription, Status};
