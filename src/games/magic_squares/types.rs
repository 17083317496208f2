//! Core domain types for magic squares.

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Seat {
    /// First player (moves first).
    PlayerOne,
    /// Second player.
    PlayerTwo,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::PlayerOne => Seat::PlayerTwo,
            Seat::PlayerTwo => Seat::PlayerOne,
        }
    }

    /// Returns the 1-based player number.
    pub fn number(self) -> u8 {
        match self {
            Seat::PlayerOne => 1,
            Seat::PlayerTwo => 2,
        }
    }

    /// Returns the 0-based index used for per-seat storage.
    pub(crate) fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Current status of the game.
///
/// `Won` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Waiting for the given seat to claim a number.
    AwaitingMove(Seat),
    /// The seat holds a winning line.
    Won(Seat),
    /// All nine numbers are claimed and nobody won.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            GameStatus::Won(seat) => Some(*seat),
            _ => None,
        }
    }

    /// Returns the seat to move, if the game is still running.
    pub fn to_move(&self) -> Option<Seat> {
        match self {
            GameStatus::AwaitingMove(seat) => Some(*seat),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::AwaitingMove(seat) => write!(f, "{} to move", seat),
            GameStatus::Won(seat) => write!(f, "{} wins!", seat),
            GameStatus::Draw => write!(f, "The game is a draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Seat::PlayerOne.opponent(), Seat::PlayerTwo);
        assert_eq!(Seat::PlayerTwo.opponent(), Seat::PlayerOne);
    }

    #[test]
    fn test_terminal_status_display() {
        assert_eq!(GameStatus::Won(Seat::PlayerOne).to_string(), "Player 1 wins!");
        assert_eq!(GameStatus::Won(Seat::PlayerTwo).to_string(), "Player 2 wins!");
        assert_eq!(GameStatus::Draw.to_string(), "The game is a draw!");
    }

    #[test]
    fn test_status_queries() {
        let waiting = GameStatus::AwaitingMove(Seat::PlayerTwo);
        assert!(!waiting.is_over());
        assert_eq!(waiting.to_move(), Some(Seat::PlayerTwo));
        assert_eq!(waiting.winner(), None);

        assert!(GameStatus::Draw.is_over());
        assert_eq!(GameStatus::Won(Seat::PlayerOne).winner(), Some(Seat::PlayerOne));
    }
}
