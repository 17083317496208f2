//! Draw detection for magic squares.

use super::super::layout::FULL_MASK;
use super::super::ChoiceSet;
use super::win::is_win;
use tracing::instrument;

/// Returns true once every number is held by one of the two players.
///
/// Tests the union of both sets, not the sum of their bits.
#[instrument(skip_all, fields(first = first.bits(), second = second.bits()))]
pub fn is_exhausted(first: &ChoiceSet, second: &ChoiceSet) -> bool {
    first.bits() | second.bits() == FULL_MASK
}

/// Returns true if all numbers are claimed and neither player has won.
pub fn is_draw(first: &ChoiceSet, second: &ChoiceSet) -> bool {
    is_exhausted(first, second) && !is_win(first) && !is_win(second)
}
