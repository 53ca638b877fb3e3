//! Line-completion rules for the 3x3 board.
//!
//! Pure functions over a [`Board`](crate::Board). The board delegates its
//! analysis queries here so the rules can be tested on their own.

pub mod lines;
pub mod threat;
pub mod win;

pub use lines::{Line, WINNING_LINES, lines_through};
pub use threat::completing_position;
pub use win::winning_marker;
