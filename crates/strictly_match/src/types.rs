//! Core domain types: markers, squares and sides.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The symbol a side uses to claim cells.
///
/// Any single visible character works. Whitespace is reserved: the board
/// renders empty squares as a blank, so a blank marker would be
/// indistinguishable from [`Square::Empty`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "char", into = "char")]
pub struct Marker(char);

impl Marker {
    /// Creates a marker, rejecting the reserved blank symbols.
    #[instrument]
    pub fn new(symbol: char) -> Result<Self, MarkerError> {
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(MarkerError::Reserved(symbol));
        }
        Ok(Self(symbol))
    }

    /// Returns the underlying character.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Marker {
    type Error = MarkerError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::new(symbol)
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}

impl std::str::FromStr for Marker {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::new(symbol),
            _ => Err(MarkerError::NotSingleCharacter(trimmed.to_string())),
        }
    }
}

/// Error produced when a marker cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarkerError {
    /// Blank and control characters are reserved for empty squares.
    #[display("{:?} is reserved for empty squares", _0)]
    Reserved(char),

    /// Input was empty or longer than one character.
    #[display("marker must be a single character, got {:?}", _0)]
    NotSingleCharacter(String),
}

impl std::error::Error for MarkerError {}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has claimed this square in the current round.
    #[default]
    Empty,
    /// Square claimed with a marker.
    Marked(Marker),
}

impl Square {
    /// Checks if the square is unclaimed.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the marker occupying this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Marked(marker) => write!(f, "{}", marker),
        }
    }
}

/// One of the two sides of a match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The person at the console.
    #[display("human")]
    Human,
    /// The computer, driven by the move selector.
    #[display("opponent")]
    #[serde(alias = "computer")]
    Opponent,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

impl std::str::FromStr for Side {
    type Err = SideParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Side::Human),
            "opponent" | "computer" => Ok(Side::Opponent),
            other => Err(SideParseError(other.to_string())),
        }
    }
}

/// Input that names neither side.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{:?} is neither \"human\" nor \"opponent\"", _0)]
pub struct SideParseError(pub String);

impl std::error::Error for SideParseError {}
