//! The 3x3 grid.

use super::error::MoveError;
use super::position::Position;
use super::types::{Marker, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Nine squares in row-major order.
///
/// A marked square is only ever cleared by [`Board::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of all nine squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Square at `pos`.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// True when nobody has played at `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Writes `marker` at `index` if the index is on the board and the square is free.
    ///
    /// Returns `false` without touching the board otherwise.
    pub fn place(&mut self, index: usize, marker: Marker) -> bool {
        self.try_place(index, marker).is_ok()
    }

    /// Like [`Board::place`], but reports why a placement was refused.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, index: usize, marker: Marker) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.squares[index] = Square::Occupied(marker);
        trace!(%pos, %marker, "Marker placed");
        Ok(pos)
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// True when every square holds a marker.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Number of squares holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.squares
            .iter()
            .filter(|s| s.marker() == Some(marker))
            .count()
    }
}

/// Renders the grid; empty squares show the 1-based key that selects them.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(marker) => write!(f, "{marker}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
