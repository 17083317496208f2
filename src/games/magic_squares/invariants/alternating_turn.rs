//! Alternating turn invariant: player one, player two, player one, ...

use super::super::{GameEngine, GameStatus, Seat};
use super::Invariant;

/// Invariant: seats alternate starting with player one.
///
/// While the game runs, the seat to move must be the one after the last
/// move in the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.seat != Seat::PlayerOne
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].seat == pair[1].seat) {
            return false;
        }

        match game.status() {
            GameStatus::AwaitingMove(seat) => {
                let expected = history
                    .last()
                    .map_or(Seat::PlayerOne, |last| last.seat.opponent());
                seat == expected
            }
            GameStatus::Won(seat) => history.last().is_some_and(|last| last.seat == seat),
            GameStatus::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate, starting with player one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new("a", "b")));
    }

    #[test]
    fn test_finished_game_holds() {
        let game = GameEngine::replay("a", "b", &[2, 7, 9, 1, 4]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_seat_to_move_violates() {
        let mut game = GameEngine::replay("a", "b", &[2]).unwrap();
        game.status = GameStatus::AwaitingMove(Seat::PlayerOne);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
