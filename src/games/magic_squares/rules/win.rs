//! Win detection for magic squares.

use super::super::{ChoiceSet, WinningLine};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns the first line fully covered by the player's claims.
///
/// Claims from every earlier turn count, not only the latest one.
#[instrument(skip(set), fields(label = %set.label(), bits = set.bits()))]
pub fn winning_line(set: &ChoiceSet) -> Option<WinningLine> {
    let bits = set.bits();
    WinningLine::iter().find(|line| bits & line.mask() == line.mask())
}

/// Returns true if the player holds a winning line.
pub fn is_win(set: &ChoiceSet) -> bool {
    winning_line(set).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claimed(numbers: &[u8]) -> ChoiceSet {
        let mut set = ChoiceSet::new("test");
        for &n in numbers {
            set.claim(n).unwrap();
        }
        set
    }

    #[test]
    fn test_no_win_empty() {
        assert!(!is_win(&ChoiceSet::new("test")));
    }

    #[test]
    fn test_win_left_column() {
        let set = claimed(&[2, 9, 4]);
        assert_eq!(winning_line(&set), Some(WinningLine::LeftColumn));
    }

    #[test]
    fn test_win_anti_diagonal() {
        let set = claimed(&[4, 6, 5]);
        assert_eq!(winning_line(&set), Some(WinningLine::AntiDiagonal));
    }

    #[test]
    fn test_win_with_extra_claims() {
        let set = claimed(&[1, 7, 3, 5]);
        assert_eq!(winning_line(&set), Some(WinningLine::CenterColumn));
    }

    #[test]
    fn test_no_win_two_of_a_line() {
        assert!(!is_win(&claimed(&[2, 6])));
    }

    #[test]
    fn test_every_triple_matches_sum() {
        for a in 1..=9u8 {
            for b in (a + 1)..=9 {
                for c in (b + 1)..=9 {
                    let set = claimed(&[c, a, b]);
                    assert_eq!(is_win(&set), a + b + c == 15, "{a}, {b}, {c}");
                }
            }
        }
    }
}
