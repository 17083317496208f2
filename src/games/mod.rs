//! Game implementations.

pub mod magic_squares;
