//! The computer opponent's move policy.
//!
//! A greedy priority list rather than a search: take the center, then an
//! immediate win, then a block, then any open square at random. An optimal
//! human can beat it.

use crate::{Board, Marker, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the policy picked a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Decision {
    /// The center was open.
    #[display("center")]
    Center,
    /// The move completes one of our lines.
    #[display("win")]
    Win,
    /// The move stops the other side completing a line.
    #[display("block")]
    Block,
    /// No tactical move; picked uniformly among open squares.
    #[display("random")]
    Random,
}

/// Picks moves for the computer side.
///
/// The random fallback draws from an owned source so tests can seed it.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Creates a selector seeded from OS entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a selector with a reproducible random fallback.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a square for `own`, playing against `opponent`.
    ///
    /// Returns `None` only when the board is full.
    pub fn select(&mut self, board: &Board, own: Marker, opponent: Marker) -> Option<Position> {
        self.decide(board, own, opponent).map(|(pos, _)| pos)
    }

    /// Like [`MoveSelector::select`], also reporting which rule fired.
    #[instrument(skip(self, board))]
    pub fn decide(
        &mut self,
        board: &Board,
        own: Marker,
        opponent: Marker,
    ) -> Option<(Position, Decision)> {
        let choice = if board.is_unmarked(Position::CENTER) {
            Some((Position::CENTER, Decision::Center))
        } else if let Some(pos) = board.win_position(own) {
            Some((pos, Decision::Win))
        } else if let Some(pos) = board.threat_position(opponent) {
            Some((pos, Decision::Block))
        } else {
            let open: Vec<Position> = board.unmarked_positions().collect();
            open.choose(&mut self.rng)
                .copied()
                .map(|pos| (pos, Decision::Random))
        };

        if let Some((pos, decision)) = choice {
            debug!(%pos, %decision, "Opponent chose a square");
        }
        choice
    }
}
