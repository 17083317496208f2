//! The order-3 magic square and its winning lines.
//!
//! The layout is only used for display. Winning lines are the rows,
//! columns and diagonals of the layout, each expressed as a 9-bit mask
//! where bit `i` stands for the number `i + 1`.

use strum::IntoEnumIterator;

/// Cells of the magic square in row-major order.
pub const LAYOUT: [u8; 9] = [2, 7, 6, 9, 5, 1, 4, 3, 8];

/// Mask with all nine number bits set.
pub const FULL_MASK: u16 = 0x1FF;

/// Sum shared by every row, column and diagonal.
pub const MAGIC_SUM: u8 = 15;

/// Returns the bit mask for a number already known to be in 1..=9.
pub(crate) const fn bit(number: u8) -> u16 {
    1 << (number - 1)
}

const fn line_mask(cells: [usize; 3]) -> u16 {
    bit(LAYOUT[cells[0]]) | bit(LAYOUT[cells[1]]) | bit(LAYOUT[cells[2]])
}

/// A row, column or diagonal of the magic square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum WinningLine {
    /// 2 7 6
    #[strum(to_string = "top row")]
    TopRow,
    /// 9 5 1
    #[strum(to_string = "middle row")]
    MiddleRow,
    /// 4 3 8
    #[strum(to_string = "bottom row")]
    BottomRow,
    /// 2 9 4
    #[strum(to_string = "left column")]
    LeftColumn,
    /// 7 5 3
    #[strum(to_string = "center column")]
    CenterColumn,
    /// 6 1 8
    #[strum(to_string = "right column")]
    RightColumn,
    /// 2 5 8
    #[strum(to_string = "main diagonal")]
    MainDiagonal,
    /// 6 5 4
    #[strum(to_string = "anti-diagonal")]
    AntiDiagonal,
}

impl WinningLine {
    /// Layout indices (0-8) covered by this line.
    pub const fn cells(self) -> [usize; 3] {
        match self {
            WinningLine::TopRow => [0, 1, 2],
            WinningLine::MiddleRow => [3, 4, 5],
            WinningLine::BottomRow => [6, 7, 8],
            WinningLine::LeftColumn => [0, 3, 6],
            WinningLine::CenterColumn => [1, 4, 7],
            WinningLine::RightColumn => [2, 5, 8],
            WinningLine::MainDiagonal => [0, 4, 8],
            WinningLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// The three numbers on this line, in layout order.
    pub fn numbers(self) -> [u8; 3] {
        self.cells().map(|cell| LAYOUT[cell])
    }

    /// The 9-bit mask of this line's numbers.
    pub const fn mask(self) -> u16 {
        line_mask(self.cells())
    }

    /// Masks of all eight lines.
    pub fn masks() -> impl Iterator<Item = u16> {
        Self::iter().map(Self::mask)
    }
}

/// Renders the bare layout, one row per line.
pub fn render_layout() -> String {
    LAYOUT
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_permutation() {
        let mut sorted = LAYOUT;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_every_line_sums_to_fifteen() {
        for line in WinningLine::iter() {
            let sum: u8 = line.numbers().iter().sum();
            assert_eq!(sum, MAGIC_SUM, "{line} sums to {sum}");
        }
    }

    #[test]
    fn test_masks_match_known_values() {
        let masks: Vec<u16> = WinningLine::masks().collect();
        assert_eq!(masks, vec![98, 273, 140, 266, 84, 161, 146, 56]);
    }

    #[test]
    fn test_lines_cover_every_fifteen_triple() {
        let mut triples = 0;
        for a in 1..=9u8 {
            for b in (a + 1)..=9 {
                for c in (b + 1)..=9 {
                    let mask = bit(a) | bit(b) | bit(c);
                    let is_line = WinningLine::masks().any(|m| m == mask);
                    assert_eq!(is_line, a + b + c == MAGIC_SUM, "{a}+{b}+{c}");
                    if is_line {
                        triples += 1;
                    }
                }
            }
        }
        assert_eq!(triples, 8);
    }

    #[test]
    fn test_render_layout() {
        assert_eq!(render_layout(), "2 7 6\n9 5 1\n4 3 8");
    }
}
