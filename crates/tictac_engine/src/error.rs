//! Move rejection reasons.

use super::engine::Phase;
use super::position::Position;

/// Why a move was refused.
///
/// Every variant is recoverable: the rejected call changed nothing and the
/// caller may simply try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Index {_0} is off the board (expected 0-8)")]
    InvalidIndex(#[error(not(source))] usize),

    /// The target square already holds a marker.
    #[display("{_0} is already taken")]
    CellOccupied(#[error(not(source))] Position),

    /// A move arrived while the game was not in progress.
    #[display("No move allowed: game is {_0}")]
    IllegalMoveTiming(#[error(not(source))] Phase),
}
