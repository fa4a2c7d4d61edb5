//! The bitmap of one character on the face display.

use crate::{GRID_COLUMNS, ROWS};

/// Lit/unlit state of one logical row. Bit `i` is grid column `i`.
pub type RowMask = u16;

/// One character and its [`ROWS`] row masks.
///
/// Bits may cover grid columns that have no LED in a given row; the layout
/// simply leaves those dark. That lets a glyph keep its shape while it is
/// shifted across the display.
///
/// ```
/// use hex_face::Glyph;
///
/// const DOT: Glyph = Glyph::new('.', [0, 0, 0, 0, 0b0001_0000]);
/// assert!(DOT.is_lit(4, 4));
/// assert!(!DOT.is_lit(4, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    character: char,
    bitmap: [RowMask; ROWS],
}

impl Glyph {
    #[must_use]
    pub const fn new(character: char, bitmap: [RowMask; ROWS]) -> Self {
        Self { character, bitmap }
    }

    /// The character this glyph draws.
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    /// The row masks, top row first.
    #[must_use]
    pub const fn bitmap(&self) -> &[RowMask; ROWS] {
        &self.bitmap
    }

    pub fn rows(&self) -> impl Iterator<Item = RowMask> + '_ {
        self.bitmap.iter().copied()
    }

    /// Whether grid column `column` of `row` is set. Out-of-range positions are never lit.
    #[must_use]
    pub fn is_lit(&self, row: usize, column: usize) -> bool {
        let Some(&mask) = self.bitmap.get(row) else {
            return false;
        };
        u32::try_from(column)
            .ok()
            .and_then(|column| RowMask::from(1_u8).checked_shl(column))
            .is_some_and(|bit| mask & bit != 0)
    }

    /// A copy moved `offset` columns: positive towards higher columns, negative towards column 0.
    ///
    /// Bits pushed out of the 16-bit mask are dropped.
    ///
    /// ```
    /// use hex_face::Glyph;
    ///
    /// let bar = Glyph::new('|', [0b100; 5]);
    /// assert_eq!(bar.shifted(2).bitmap(), &[0b1_0000; 5]);
    /// assert_eq!(bar.shifted(-3).bitmap(), &[0; 5]);
    /// ```
    #[must_use]
    pub fn shifted(&self, offset: i8) -> Self {
        let distance = u32::from(offset.unsigned_abs());
        let bitmap = self.bitmap.map(|mask| {
            if offset >= 0 {
                mask.checked_shl(distance).unwrap_or(0)
            } else {
                mask.checked_shr(distance).unwrap_or(0)
            }
        });
        Self::new(self.character, bitmap)
    }

    /// Number of set bits that fall inside the grid, summed over all rows.
    #[must_use]
    pub fn lit_count(&self) -> u32 {
        let grid = RowMask::MAX >> (RowMask::BITS as usize - GRID_COLUMNS);
        self.rows().map(|mask| (mask & grid).count_ones()).sum()
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    const PLUS: Glyph = Glyph::new('+', [0, 0b0_0001_0000, 0b0_0011_1000, 0b0_0001_0000, 0]);

    #[test]
    fn is_lit_follows_bit_positions() {
        assert!(PLUS.is_lit(2, 3));
        assert!(PLUS.is_lit(2, 4));
        assert!(PLUS.is_lit(2, 5));
        assert!(!PLUS.is_lit(2, 6));
        assert!(!PLUS.is_lit(0, 4));
    }

    #[test]
    fn is_lit_out_of_range_is_dark() {
        assert!(!PLUS.is_lit(ROWS, 4));
        assert!(!PLUS.is_lit(2, 16));
        assert!(!PLUS.is_lit(2, usize::MAX));
    }

    #[test]
    fn shifted_keeps_character_and_moves_bits() {
        let moved = PLUS.shifted(1);
        assert_eq!(moved.character(), '+');
        assert_eq!(moved.bitmap(), &[0, 0b0_0010_0000, 0b0_0111_0000, 0b0_0010_0000, 0]);
        assert_eq!(PLUS.shifted(-4).bitmap(), &[0, 0b1, 0b11, 0b1, 0]);
        assert_eq!(PLUS.shifted(0), PLUS);
    }

    #[test]
    fn shifted_far_clears_everything() {
        assert_eq!(PLUS.shifted(16).bitmap(), &[0; ROWS]);
        assert_eq!(PLUS.shifted(i8::MIN).bitmap(), &[0; ROWS]);
    }

    #[test]
    fn lit_count_ignores_bits_past_the_grid() {
        assert_eq!(PLUS.lit_count(), 5);
        let wide = Glyph::new('w', [0b1111_1110_0000_0000, 0, 0, 0, 0]);
        assert_eq!(wide.lit_count(), 0);
    }
}
