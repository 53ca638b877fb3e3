//! The fixed catalog of winning lines.

use crate::Position;

/// Three distinct positions that end a round when uniformly marked.
pub type Line = [Position; 3];

/// Every winning line, in scan order: rows, then columns, then diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Lines that pass through `position`, in catalog order.
pub fn lines_through(position: Position) -> impl Iterator<Item = &'static Line> {
    let catalog: &'static [Line; 8] = &WINNING_LINES;
    catalog
        .iter()
        .filter(move |line| line.contains(&position))
}
