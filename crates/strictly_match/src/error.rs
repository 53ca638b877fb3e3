//! Error types for match setup and play.

use crate::{Marker, Position, Side};

/// Error raised while configuring a match.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Both sides asked for the same marker.
    #[display("both sides cannot use the marker {}", _0)]
    DuplicateMarker(Marker),

    /// A name was empty or only whitespace.
    #[display("the {} name cannot be blank", _0)]
    BlankName(Side),

    /// Both sides asked for the same name.
    #[display("both sides cannot be named {:?}", _0)]
    DuplicateName(String),

    /// `start` was called before `set_markers`.
    #[display("markers have not been set")]
    MissingMarkers,

    /// `start` was called before `set_names`.
    #[display("names have not been set")]
    MissingNames,
}

impl std::error::Error for SetupError {}

/// Error raised when the match state machine is driven out of order.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// A move was made before anyone was chosen to go first.
    #[display("nobody has been chosen to move first")]
    FirstMoverUndecided,

    /// The first mover was already chosen for this round.
    #[display("the first mover has already been chosen this round")]
    FirstMoverAlreadyChosen,

    /// The square is already marked.
    #[display("square {} is already marked", _0)]
    SquareOccupied(Position),

    /// The given side tried to move while the other side was active.
    #[display("it is not the {}'s turn", _0)]
    NotYourTurn(Side),

    /// The round has ended; start the next one first.
    #[display("the round is over")]
    RoundOver,

    /// The current round is still being played.
    #[display("the round is still in progress")]
    RoundInProgress,

    /// The match has ended.
    #[display("the match is over")]
    MatchOver,
}

impl std::error::Error for MatchError {}
