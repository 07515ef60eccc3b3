//! Two-player tic-tac-toe front ends.
//!
//! Both front ends drive the same [`tictac_engine::Engine`]:
//!
//! - **tui**: full-screen grid with a movable cursor, drawn with ratatui
//! - **console**: line-oriented prompt over any reader/writer pair
//!
//! Configuration comes from an optional TOML file plus command-line
//! overrides; logs always go to a file so they never mix with the game.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod banner;
mod cli;
mod config;
mod console;
mod logging;
mod tui;

pub use banner::result_banner;
pub use cli::{Cli, Command};
pub use config::{ConfigError, TictacConfig};
pub use console::{ConsoleCommand, ConsoleSession};
pub use logging::init_logging;
pub use tui::{App, Flow, NameField, Screen, draw, move_cursor, run_tui};
