//! Per-match player records.

use crate::Marker;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One side's marker, name and round wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    marker: Marker,
    name: String,
    score: u32,
}

impl Player {
    /// Creates a player with no round wins.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(marker: Marker, name: impl AsRef<str>) -> Self {
        Self {
            marker,
            name: name.as_ref().to_string(),
            score: 0,
        }
    }

    /// Returns the player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of rounds won this match.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn award_round(&mut self) {
        self.score += 1;
        debug!(player = %self.name, score = self.score, "Round awarded");
    }
}
