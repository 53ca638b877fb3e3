//! Completed-line detection.

use super::lines::WINNING_LINES;
use crate::{Board, Marker, Square};
use tracing::instrument;

/// Returns the marker of the first catalog line whose three squares hold
/// the same marker, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.marker();
        }
    }

    None
}
