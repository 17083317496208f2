//! History consistency invariant: the sets are exactly what the moves claimed.

use super::super::{ChoiceSet, GameEngine};
use super::Invariant;

/// Invariant: replaying the history per seat rebuilds both sets.
///
/// A number appearing twice in the history also breaks this invariant.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut rebuilt = [ChoiceSet::new(""), ChoiceSet::new("")];

        for mov in game.history() {
            match rebuilt[mov.seat.index()].claim(mov.number) {
                Ok(true) => {}
                Ok(false) | Err(_) => return false,
            }
        }

        game.players()
            .iter()
            .zip(&rebuilt)
            .all(|(actual, expected)| actual.bits() == expected.bits())
    }

    fn description() -> &'static str {
        "Claimed numbers match the move history"
    }
}
