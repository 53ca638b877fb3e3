//! Match phases and outcomes.

use crate::Side;
use serde::{Deserialize, Serialize};

/// Where the match state machine currently is.
///
/// ```text
/// AwaitingFirstMover -> RoundInProgress -> RoundEnded -> AwaitingFirstMover ...
///                                             \-> MatchEnded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// The board is clear and nobody has been picked to move first.
    AwaitingFirstMover,
    /// Sides are alternating moves.
    RoundInProgress,
    /// The last move completed a line or filled the board.
    RoundEnded,
    /// Terminal.
    MatchEnded,
}

/// Result of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Still being played.
    Ongoing,
    /// A side completed a line.
    Won(Side),
    /// The board filled with no completed line.
    Tied,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::Won(side) => Some(side),
            RoundOutcome::Ongoing | RoundOutcome::Tied => None,
        }
    }

    /// Checks if the round has finished.
    pub fn is_over(self) -> bool {
        !matches!(self, RoundOutcome::Ongoing)
    }
}

/// Result of the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Nobody has reached the winning score yet.
    Ongoing,
    /// A side reached the winning score.
    Won(Side),
    /// Play was abandoned before anyone reached the winning score.
    NoWinner,
}

impl MatchOutcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Side> {
        match self {
            MatchOutcome::Won(side) => Some(side),
            MatchOutcome::Ongoing | MatchOutcome::NoWinner => None,
        }
    }
}

/// Round wins per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by the human.
    pub human: u32,
    /// Rounds won by the opponent.
    pub opponent: u32,
}
