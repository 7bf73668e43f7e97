//! Terminal front end for replay_tictactoe.
//!
//! Renders the engine's view model with ratatui and turns key presses into
//! engine commands. Also provides a scripted `replay` mode for use in
//! pipelines and tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command, OrderArg};
pub use config::{ConfigError, Settings};
