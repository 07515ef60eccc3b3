//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Name given to the first player when none is configured.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";

/// Name given to the second player when none is configured.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// Symbol a player writes into squares.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Cross, always held by the first player.
    #[display("X")]
    X,
    /// Nought, always held by the second player.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square holds a player's marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker in this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    /// True when the square holds no marker.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// A named participant and the marker they play.
///
/// Players are plain values; renaming replaces both players wholesale.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Getters,
    derive_new::new,
    derive_more::Display,
)]
#[display("{name}")]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Marker this player writes.
    marker: Marker,
}

impl Player {
    /// Builds a player, substituting `fallback` when `name` is blank.
    ///
    /// Surrounding whitespace is trimmed before the blank check.
    pub fn named_or(name: &str, fallback: &str, marker: Marker) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() { fallback } else { trimmed };
        Self::new(name, marker)
    }
}
