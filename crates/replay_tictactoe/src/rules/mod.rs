//! Game rules for tic-tac-toe.
//!
//! Pure, stateless classification of a single board. Rules are separated
//! from history management so the engine and the view can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, Line, find_winning_line, winner};
