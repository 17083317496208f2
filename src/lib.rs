//! Magic Squares library - tic-tac-toe played with the numbers 1-9
//!
//! Two players take turns claiming numbers from a shared pool. The first
//! to hold three numbers summing to 15 wins; if all nine are claimed
//! without a winner, the game is a draw. The three-number sums are exactly
//! the lines of the order-3 magic square:
//!
//! ```text
//! 2 7 6
//! 9 5 1
//! 4 3 8
//! ```
//!
//! # Architecture
//!
//! - **ChoiceSet**: one player's claims as a 9-bit set
//! - **GameEngine**: turn order, move validation, win and draw detection
//! - **Console / Orchestrator**: the terminal front end
//! - **GameConfig**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use magic_squares::{GameEngine, GameStatus, Seat};
//!
//! # fn example() -> Result<(), magic_squares::MoveError> {
//! let mut game = GameEngine::new("Ada", "Grace");
//! for number in [2, 7, 9, 1] {
//!     game.play(number)?;
//! }
//! assert_eq!(game.play(4)?, GameStatus::Won(Seat::PlayerOne));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front end
pub use console::{Console, ConsoleError, Orchestrator, BANNER};

// Crate-level exports - Game types
pub use games::magic_squares::{
    is_draw, is_exhausted, is_win, render_layout, winning_line, AlternatingTurnInvariant,
    ChoiceSet, DisjointClaimsInvariant, GameEngine, GameStatus, HistoryConsistentInvariant,
    Invariant, InvariantSet, InvariantViolation, MagicSquaresInvariants, Move, MoveError, Seat,
    SelectionError, WinningLine, FULL_MASK, LAYOUT, MAGIC_SUM, PLACEHOLDER,
};
