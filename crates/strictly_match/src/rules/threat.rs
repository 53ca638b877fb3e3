//! Two-of-three scanning for immediate wins and threats.

use super::lines::lines_through;
use crate::{Board, Marker, Position, Square};
use tracing::instrument;

/// Finds an empty position that would complete a line for `marker`.
///
/// Scans empty positions in ascending order and, for each, the lines through
/// it in catalog order. The first line holding exactly two `marker` squares
/// and exactly one empty square selects the position being scanned.
///
/// Asking with one's own marker yields a winning move; asking with the
/// other side's marker yields the square that must be blocked.
#[instrument(skip(board))]
pub fn completing_position(board: &Board, marker: Marker) -> Option<Position> {
    board.unmarked_positions().find(|&pos| {
        lines_through(pos).any(|line| {
            let squares = line.map(|p| board.get(p));
            let marked = squares
                .iter()
                .filter(|sq| **sq == Square::Marked(marker))
                .count();
            let empty = squares.iter().filter(|sq| sq.is_empty()).count();
            marked == 2 && empty == 1
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_complete_on_empty_board() {
        let x = Marker::new('X').unwrap();
        assert_eq!(completing_position(&Board::new(), x), None);
    }

    #[test]
    fn lowest_qualifying_position_is_returned() {
        let x = Marker::new('X').unwrap();
        let mut board = Board::new();
        // X at 5 and 9: completes 1 via the diagonal
        // X at 3 too: completes 7 via the anti-diagonal, and 6 via column 3
        board.assign(Position::Center, x);
        board.assign(Position::BottomRight, x);
        board.assign(Position::TopRight, x);
        assert_eq!(completing_position(&board, x), Some(Position::TopLeft));
    }
}
