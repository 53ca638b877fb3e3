//! Moves as first-class records.

use crate::{Marker, Position, Side};
use serde::{Deserialize, Serialize};

/// A side claiming a position with its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The side that moved.
    pub side: Side,
    /// The marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.side, self.marker, self.position)
    }
}
