//! Win and tie detection.

use super::board::Board;
use super::position::Position;
use super::types::Marker;
use tracing::instrument;

/// The eight lines that win: three rows, three columns, two diagonals.
///
/// Detection walks them in this order and stops at the first match.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The first line whose three squares hold the same marker.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Marker, [Position; 3])> {
    let squares = board.squares();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let marker = squares[a].marker()?;
        if squares[b].marker() == Some(marker) && squares[c].marker() == Some(marker) {
            Some((marker, [Position::ALL[a], Position::ALL[b], Position::ALL[c]]))
        } else {
            None
        }
    })
}

/// Marker of the winning line, if one exists.
pub fn check_winner(board: &Board) -> Option<Marker> {
    winning_line(board).map(|(marker, _)| marker)
}

/// Full board with no winning line.
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
