//! The 3x3 board.

use crate::rules;
use crate::{Marker, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// 3x3 board of squares, keyed by [`Position`].
///
/// Created once per match and cleared with [`Board::reset`] at the start of
/// every round. A marked square stays marked until the next reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_unmarked(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Claims an empty square for `marker`.
    ///
    /// Callers are expected to check [`Board::is_unmarked`] first. Assigning
    /// over a marked square leaves the board unchanged.
    #[instrument(skip(self))]
    pub fn assign(&mut self, pos: Position, marker: Marker) {
        match self.get(pos) {
            Square::Empty => self.squares[pos.index()] = Square::Marked(marker),
            Square::Marked(existing) => {
                warn!(%pos, %existing, %marker, "Ignoring assignment to a marked square");
            }
        }
    }

    /// Empty positions in ascending order.
    ///
    /// Computed fresh on every call; call again to restart.
    pub fn unmarked_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_unmarked(pos))
    }

    /// Checks if every square is marked.
    pub fn is_full(&self) -> bool {
        self.unmarked_positions().next().is_none()
    }

    /// Marker of the first completed line in catalog order.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::winning_marker(self)
    }

    /// Checks if any line is complete.
    pub fn someone_won(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// An empty position where `opponent` would complete a line next turn.
    pub fn threat_position(&self, opponent: Marker) -> Option<Position> {
        rules::completing_position(self, opponent)
    }

    /// An empty position that immediately completes a line for `own`.
    pub fn win_position(&self, own: Marker) -> Option<Position> {
        rules::completing_position(self, own)
    }

    /// Clears every square for a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Compact grid: empty squares show their number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in Position::ALL.chunks(3).enumerate() {
            let cells: Vec<String> = chunk
                .iter()
                .map(|&pos| match self.get(pos) {
                    Square::Empty => pos.to_string(),
                    Square::Marked(marker) => marker.to_string(),
                })
                .collect();
            write!(f, "{}", cells.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
