//! Console front end: prompts, line input and game output.
//!
//! This is the only part of the crate that reads or writes text. The
//! engine sees validated numbers and nothing else.

mod orchestrator;
mod prompt;

pub use orchestrator::Orchestrator;
pub use prompt::{Console, BANNER};

use crate::games::magic_squares::MoveError;

/// Error raised by the console front end.
#[derive(Debug, derive_more::Display)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The input stream ended before the game did.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The engine refused a move the console had validated.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(err) => Some(err),
            ConsoleError::Move(err) => Some(err),
            ConsoleError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

impl From<MoveError> for ConsoleError {
    fn from(err: MoveError) -> Self {
        ConsoleError::Move(err)
    }
}
