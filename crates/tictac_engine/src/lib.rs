//! Rules engine for two-player tic-tac-toe.
//!
//! The crate has no notion of terminals, files or input devices. A
//! presentation layer owns an [`Engine`], feeds it cell indices through
//! [`Engine::play_move`] and re-reads the board and status after every
//! state-changing call.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Engine, Marker, Placement};
//!
//! let mut engine = Engine::new();
//! engine.start_game("Ada", "Grace");
//!
//! for index in [0, 3, 1, 4] {
//!     engine.play_move(index).unwrap();
//! }
//! let placement = engine.play_move(2).unwrap();
//!
//! assert!(matches!(placement, Placement::Won { winner: Marker::X, .. }));
//! assert_eq!(engine.winner().map(|p| p.name().as_str()), Some("Ada"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod invariants;
mod position;
mod rules;
mod types;

pub use board::Board;
pub use engine::{Engine, GameState, Phase, Placement, Seat, Status};
pub use error::MoveError;
pub use invariants::{
    HistoryMatchesBoard, Invariant, InvariantViolation, MarkCountsBalanced, WinnerImpliesOver,
    check_all,
};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, is_tie, winning_line};
pub use types::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Marker, Player, Square};
