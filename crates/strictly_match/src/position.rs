//! Board positions, numbered 1-9 in row-major order.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// Positions are numbered the way the console shows them to players:
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
///
/// Because the set of positions is closed, an out-of-range position cannot
/// be constructed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The center cell, preferred by the opponent policy.
    pub const CENTER: Position = Position::Center;

    /// Returns the player-facing number (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Creates a position from its player-facing number (1-9).
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// Zero-based storage index (0-8).
    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl std::str::FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| PositionParseError(trimmed.to_string()))
    }
}

/// Input that does not name a square 1-9.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{:?} is not a square between 1 and 9", _0)]
pub struct PositionParseError(pub String);

impl std::error::Error for PositionParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn numbers_round_trip_in_row_major_order() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(usize::from(pos.number()), i + 1);
            assert_eq!(Position::from_number(pos.number()), Some(pos));
        }
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(10), None);
    }

    #[test]
    fn parses_trimmed_numbers_only() {
        assert_eq!(" 5\n".parse::<Position>(), Ok(Position::Center));
        assert!("0".parse::<Position>().is_err());
        assert!("center".parse::<Position>().is_err());
    }
}
