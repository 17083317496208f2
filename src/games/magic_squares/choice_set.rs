//! A single player's claimed numbers.

use super::action::SelectionError;
use super::layout::bit;
use tracing::{instrument, trace};

/// Glyph rendered for a cell the player has not claimed.
pub const PLACEHOLDER: char = '_';

/// The numbers one player has claimed, as a 9-bit set.
///
/// Bit `i` is set iff the number `i + 1` was claimed. Bits are only
/// ever added; nothing clears them during a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    bits: u16,
    label: String,
}

impl ChoiceSet {
    /// Creates an empty set for the named player.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            bits: 0,
            label: label.into(),
        }
    }

    /// Claims `number`.
    ///
    /// Returns `Ok(false)` without changing anything when the number is
    /// already in the set.
    #[instrument(skip(self), fields(label = %self.label))]
    pub fn claim(&mut self, number: u8) -> Result<bool, SelectionError> {
        let mask = mask_for(number)?;
        if self.bits & mask != 0 {
            trace!(number, "Already claimed");
            return Ok(false);
        }
        self.bits |= mask;
        Ok(true)
    }

    /// Returns whether `number` has been claimed.
    pub fn has_claimed(&self, number: u8) -> Result<bool, SelectionError> {
        Ok(self.bits & mask_for(number)? != 0)
    }

    /// Raw snapshot of the 9-bit state.
    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// The player's display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the display name.
    pub fn rename(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Number of claimed numbers.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Claimed numbers in ascending order.
    pub fn numbers(&self) -> Vec<u8> {
        (1..=9).filter(|&n| self.contains(n)).collect()
    }

    /// Renders the layout with unclaimed cells shown as `_`.
    pub fn render(&self, layout: &[u8; 9]) -> String {
        self.render_with(layout, PLACEHOLDER)
    }

    /// Renders the layout, three cells per line, with unclaimed cells
    /// shown as `placeholder`.
    ///
    /// Every layout entry must be in 1..=9.
    pub fn render_with(&self, layout: &[u8; 9], placeholder: char) -> String {
        debug_assert!(
            layout.iter().all(|n| (1..=9).contains(n)),
            "layout entries must be 1-9, got {layout:?}"
        );
        layout
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|&n| {
                        if self.contains(n) {
                            n.to_string()
                        } else {
                            placeholder.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn contains(&self, number: u8) -> bool {
        mask_for(number).is_ok_and(|mask| self.bits & mask != 0)
    }
}

fn mask_for(number: u8) -> Result<u16, SelectionError> {
    if (1..=9).contains(&number) {
        Ok(bit(number))
    } else {
        Err(SelectionError::OutOfRange(i64::from(number)))
    }
}
