//! First-class move and error types for magic squares.

use super::Seat;
use derive_new::new;

/// A claim of one number by one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Move {
    /// The seat making the claim.
    pub seat: Seat,
    /// The claimed number (1-9).
    pub number: u8,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.seat, self.number)
    }
}

/// A number outside the playable range was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectionError {
    /// The number is not in 1..=9.
    #[display("Selection {} is outside 1-9", _0)]
    OutOfRange(i64),
}

impl std::error::Error for SelectionError {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The number itself is invalid.
    #[display("{}", _0)]
    Selection(SelectionError),

    /// Somebody already holds the number.
    #[display("{} has already been chosen by {}", number, by)]
    AlreadyClaimed {
        /// The contested number.
        number: u8,
        /// The seat holding it.
        by: Seat,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Selection(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SelectionError> for MoveError {
    fn from(err: SelectionError) -> Self {
        MoveError::Selection(err)
    }
}
