//! Magic squares: tic-tac-toe played by claiming the numbers 1-9.

mod action;
mod choice_set;
mod engine;
mod invariants;
mod layout;
mod rules;
mod types;

pub use action::{Move, MoveError, SelectionError};
pub use choice_set::{ChoiceSet, PLACEHOLDER};
pub use engine::GameEngine;
pub use invariants::{
    AlternatingTurnInvariant, DisjointClaimsInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MagicSquaresInvariants,
};
pub use layout::{render_layout, WinningLine, FULL_MASK, LAYOUT, MAGIC_SUM};
pub use rules::{is_draw, is_exhausted, is_win, winning_line};
pub use types::{GameStatus, Seat};
