//! Disjoint claims invariant: no number belongs to both players.

use super::super::layout::FULL_MASK;
use super::super::GameEngine;
use super::Invariant;

/// Invariant: the two sets never share a bit and stay within nine bits.
pub struct DisjointClaimsInvariant;

impl Invariant<GameEngine> for DisjointClaimsInvariant {
    fn holds(game: &GameEngine) -> bool {
        let [first, second] = game.players();
        first.bits() & second.bits() == 0
            && (first.bits() | second.bits()) & !FULL_MASK == 0
    }

    fn description() -> &'static str {
        "Each number is claimed by at most one player"
    }
}
