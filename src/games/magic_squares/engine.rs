//! Turn engine for magic squares.
//!
//! The engine owns both players' sets, decides whose turn it is and
//! evaluates the board after every claim. It never touches the terminal:
//! it receives numbers and reports a [`GameStatus`].

use super::action::{Move, MoveError, SelectionError};
use super::invariants::{InvariantSet, MagicSquaresInvariants};
use super::{rules, ChoiceSet, GameStatus, Seat};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Two-player magic squares game.
///
/// Starts in `AwaitingMove(PlayerOne)` and ends in `Won` or `Draw`,
/// which always happens within nine moves.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(super) players: [ChoiceSet; 2],
    pub(super) status: GameStatus,
    pub(super) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game between two named players.
    #[instrument(skip_all)]
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            players: [ChoiceSet::new(player_one), ChoiceSet::new(player_two)],
            status: GameStatus::AwaitingMove(Seat::PlayerOne),
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by playing `numbers` in order from a fresh start.
    #[instrument(skip(player_one, player_two))]
    pub fn replay(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        numbers: &[u8],
    ) -> Result<Self, MoveError> {
        let mut game = Self::new(player_one, player_two);
        for &number in numbers {
            game.play(number)?;
        }
        Ok(game)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the seat to move, or `None` once the game is over.
    pub fn active(&self) -> Option<Seat> {
        self.status.to_move()
    }

    /// Returns the claimed set of a seat.
    pub fn player(&self, seat: Seat) -> &ChoiceSet {
        &self.players[seat.index()]
    }

    /// Returns both sets, player one first.
    pub fn players(&self) -> &[ChoiceSet; 2] {
        &self.players
    }

    /// Returns the moves made so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Changes a player's display name.
    pub fn rename(&mut self, seat: Seat, label: impl Into<String>) {
        self.players[seat.index()].rename(label);
    }

    /// Returns the seat holding `number`, if any.
    pub fn holder(&self, number: u8) -> Result<Option<Seat>, SelectionError> {
        for seat in Seat::iter() {
            if self.player(seat).has_claimed(number)? {
                return Ok(Some(seat));
            }
        }
        Ok(None)
    }

    /// Returns true if `number` is in range and unclaimed by both players.
    pub fn is_available(&self, number: u8) -> bool {
        matches!(self.holder(number), Ok(None))
    }

    /// Numbers nobody has claimed yet, ascending.
    pub fn available(&self) -> Vec<u8> {
        (1..=9).filter(|&n| self.is_available(n)).collect()
    }

    /// Validates a candidate number without changing anything.
    ///
    /// Accepts any integer so the input boundary can hand over whatever
    /// the user typed.
    #[instrument(skip(self))]
    pub fn check_selection(&self, number: i64) -> Result<u8, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let number = u8::try_from(number).map_err(|_| SelectionError::OutOfRange(number))?;
        if let Some(by) = self.holder(number)? {
            return Err(MoveError::AlreadyClaimed { number, by });
        }
        Ok(number)
    }

    /// Claims `number` for the active seat and evaluates the result.
    ///
    /// On error nothing is changed. Otherwise the new status is returned:
    /// `Won` if the mover now holds a winning line, `Draw` if all nine
    /// numbers are gone, and `AwaitingMove` for the other seat otherwise.
    /// A win on the ninth move is a win, not a draw.
    ///
    /// In debug builds the invariants are checked on the next state
    /// before it replaces the current one.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn play(&mut self, number: u8) -> Result<GameStatus, MoveError> {
        let seat = self.status.to_move().ok_or(MoveError::GameOver)?;
        let number = self.check_selection(i64::from(number))?;

        let mut next = self.clone();
        let claimed = next.players[seat.index()].claim(number)?;
        debug_assert!(claimed, "validated number was already claimed");
        next.history.push(Move::new(seat, number));

        next.status = if let Some(line) = rules::winning_line(&next.players[seat.index()]) {
            info!(%seat, %line, "Winning line completed");
            GameStatus::Won(seat)
        } else if rules::is_exhausted(&next.players[0], &next.players[1]) {
            info!("All numbers claimed without a winner");
            GameStatus::Draw
        } else {
            GameStatus::AwaitingMove(seat.opponent())
        };

        #[cfg(debug_assertions)]
        next.verify()?;

        debug!(%seat, number, "Number claimed");
        *self = next;
        Ok(self.status)
    }

    /// Checks every game invariant.
    #[instrument(skip(self))]
    pub fn verify(&self) -> Result<(), MoveError> {
        MagicSquaresInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}
