//! Shell error type.

use crate::ConfigError;
use strictly_match::{MatchError, SetupError};

/// Anything that stops an interactive session.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ShellError {
    /// Reading from or writing to the terminal failed.
    #[display("terminal I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ended while a prompt was waiting for an answer.
    #[display("input closed before the match finished")]
    #[from(ignore)]
    InputClosed,

    /// Configured markers or names were rejected.
    #[display("invalid match setup: {}", _0)]
    Setup(SetupError),

    /// The match state machine refused a transition.
    #[display("match error: {}", _0)]
    Match(MatchError),

    /// The configuration file could not be used.
    #[display("{}", _0)]
    Config(ConfigError),
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Io(e) => Some(e),
            ShellError::InputClosed => None,
            ShellError::Setup(e) => Some(e),
            ShellError::Match(e) => Some(e),
            ShellError::Config(e) => Some(e),
        }
    }
}
