//! Strictly Match - tic-tac-toe match engine
//!
//! The game-state core for a human playing the computer over a series of
//! rounds on a 3x3 board. The first side to win three rounds takes the
//! match.
//!
//! # Architecture
//!
//! - **Board**: nine squares, line-completion and two-of-three analysis
//! - **Rules**: the constant catalog of winning lines and pure scanners
//! - **MoveSelector**: the computer's greedy move policy
//! - **MatchController**: turn order, round scoring and the match state machine
//!
//! Console I/O lives in the `strictly_match_cli` crate.
//!
//! # Example
//!
//! ```
//! use strictly_match::{Marker, MatchSetup, MoveSelector, Position, Side};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut setup = MatchSetup::new();
//! setup.set_markers(Marker::new('X')?, Marker::new('O')?)?;
//! setup.set_names("Ada", "Hal")?;
//! let mut game = setup.start()?;
//!
//! game.choose_first_mover(Side::Human)?;
//! game.play_human_turn(Position::TopLeft)?;
//!
//! let mut selector = MoveSelector::seeded(7);
//! let (pos, _) = game.play_opponent_turn(&mut selector)?;
//! assert_eq!(pos, Position::Center);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod controller;
mod error;
mod phases;
mod player;
mod position;
mod selector;
mod types;

pub mod rules;

pub use action::Move;
pub use board::Board;
pub use controller::{MatchController, MatchSetup, WINNING_SCORE};
pub use error::{MatchError, SetupError};
pub use phases::{MatchOutcome, MatchPhase, RoundOutcome, Scores};
pub use player::Player;
pub use position::{Position, PositionParseError};
pub use selector::{Decision, MoveSelector};
pub use types::{Marker, MarkerError, Side, SideParseError, Square};
