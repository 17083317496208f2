//! Game rules for magic squares.
//!
//! Pure functions over claimed-number sets. Rules are kept apart from
//! the engine so they can be checked on any pair of sets.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_exhausted};
pub use win::{is_win, winning_line};
