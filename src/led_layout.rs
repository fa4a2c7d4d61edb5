//! A fully const module that tells the (row, column) location of each LED on the face.
//!
//! See [`HexLayout`] for the robot's hexagonal layout and for turning glyphs into lit LEDs.

use heapless::Vec;
use smart_leds::RGB8;

use crate::{GRID_COLUMNS, Glyph, LED_COUNT, ROWS, face::FaceExpression, glyph::RowMask};

/// One color per LED, indexed like the physical strip.
pub type Frame = [RGB8; LED_COUNT];

/// The face's physical layout: rows of 5, 7, 9, 7, 5 LEDs centred in a 9-column grid.
///
/// ```text
///   Grid column:   0   1   2   3   4   5   6   7   8
///   Row 0:                 0   1   2   3   4
///   Row 1:             5   6   7   8   9  10  11
///   Row 2:        12  13  14  15  16  17  18  19  20
///   Row 3:            21  22  23  24  25  26  27
///   Row 4:                28  29  30  31  32
/// ```
pub const HEX_LAYOUT: HexLayout = HexLayout::new([(2, 5), (1, 7), (0, 9), (1, 7), (2, 5)]);

/// A fully const struct that tells which grid columns of each row hold an LED.
///
/// Each row is one contiguous span `(first_column, width)`. LEDs are numbered
/// row-major: left to right along row 0, then row 1, and so on.
///
/// ```
/// use hex_face::{HEX_LAYOUT, led_layout::HexLayout};
///
/// const ROWS_5_7_9_7_5: HexLayout = HexLayout::new([(2, 5), (1, 7), (0, 9), (1, 7), (2, 5)]);
/// const _: () = assert!(ROWS_5_7_9_7_5.equals(&HEX_LAYOUT));
/// assert_eq!(HEX_LAYOUT.led_index(2, 0), Some(12));
/// ```
///
/// Compile-time validation catches configuration errors:
///
/// ```compile_fail
/// # use hex_face::led_layout::HexLayout;
/// // Row 2 runs past grid column 8 - caught at compile time
/// const INVALID: HexLayout = HexLayout::new([(2, 5), (1, 7), (1, 9), (1, 7), (2, 5)]);
/// const _: () = assert!(INVALID.equals(&INVALID));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexLayout {
    spans: [(u8, u8); ROWS],
    row_starts: [u8; ROWS],
}

impl HexLayout {
    /// Constructor: verifies every span fits the grid and that the spans hold exactly
    /// [`LED_COUNT`] LEDs.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Indexes stay below ROWS; sums are bounded by the asserts."
    )]
    pub const fn new(spans: [(u8, u8); ROWS]) -> Self {
        let mut row_starts = [0_u8; ROWS];
        let mut total = 0_usize;

        let mut row_index = 0;
        while row_index < ROWS {
            let (first_column, width) = spans[row_index];
            assert!(width > 0, "every row needs at least one LED");
            assert!(
                first_column as usize + width as usize <= GRID_COLUMNS,
                "row runs past the grid"
            );
            assert!(total < LED_COUNT, "spans hold more than LED_COUNT LEDs");
            row_starts[row_index] = total as u8;
            total += width as usize;
            row_index += 1;
        }
        assert!(total == LED_COUNT, "spans must hold exactly LED_COUNT LEDs");

        Self { spans, row_starts }
    }

    /// Const equality helper for doctests.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Index stays below ROWS."
    )]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < ROWS {
            if self.spans[i].0 != other.spans[i].0 || self.spans[i].1 != other.spans[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Access the checked `(first_column, width)` spans, top row first.
    #[must_use]
    pub const fn spans(&self) -> &[(u8, u8); ROWS] {
        &self.spans
    }

    /// Grid position → LED index, or `None` where the grid has no LED.
    #[must_use]
    pub fn led_index(&self, row: usize, column: usize) -> Option<u8> {
        let &(first_column, width) = self.spans.get(row)?;
        let offset = column.checked_sub(usize::from(first_column))?;
        if offset >= usize::from(width) {
            return None;
        }
        let start = *self.row_starts.get(row)?;
        // offset < width <= GRID_COLUMNS, so it fits in u8
        start.checked_add(u8::try_from(offset).ok()?)
    }

    /// Reverse lookup: LED index → `(row, column)` on the grid.
    #[must_use]
    pub fn position(&self, led: u8) -> Option<(usize, usize)> {
        self.spans
            .iter()
            .zip(self.row_starts)
            .enumerate()
            .find_map(|(row, (&(first_column, width), start))| {
                let offset = led.checked_sub(start)?;
                (offset < width).then(|| (row, usize::from(first_column) + usize::from(offset)))
            })
    }

    /// Columns of `row` that hold an LED, as a row mask. Zero for rows past the bottom.
    #[must_use]
    pub fn row_mask(&self, row: usize) -> RowMask {
        self.spans.get(row).map_or(0, |&(first_column, width)| {
            let ones = RowMask::MAX >> (RowMask::BITS - u32::from(width));
            ones << first_column
        })
    }

    /// LEDs lit by `glyph` moved `offset` columns (see [`Glyph::shifted`]), in ascending order.
    ///
    /// Bits on grid positions without an LED are dropped.
    ///
    /// ```
    /// use hex_face::{HEX_LAYOUT, lookup};
    ///
    /// let dot = lookup('.').expect("'.' is built in");
    /// assert_eq!(HEX_LAYOUT.lit_leds(dot, 0).as_slice(), &[30]);
    /// ```
    #[must_use]
    pub fn lit_leds(&self, glyph: &Glyph, offset: i8) -> Vec<u8, LED_COUNT> {
        let shifted = glyph.shifted(offset);
        (0..ROWS)
            .flat_map(|row| (0..GRID_COLUMNS).map(move |column| (row, column)))
            .filter(|&(row, column)| shifted.is_lit(row, column))
            .filter_map(|(row, column)| self.led_index(row, column))
            .collect()
    }

    /// Set the LEDs lit by `glyph` to `color`; every other pixel keeps its value.
    ///
    /// Call repeatedly with different offsets to lay out scrolling text.
    pub fn paint(&self, frame: &mut Frame, glyph: &Glyph, offset: i8, color: RGB8) {
        for led in self.lit_leds(glyph, offset) {
            if let Some(pixel) = frame.get_mut(usize::from(led)) {
                *pixel = color;
            }
        }
    }

    /// Set every LED of `face` to `color`; other pixels keep their value.
    ///
    /// ```
    /// use hex_face::{Frame, HEX_LAYOUT, LED_COUNT, face::SMILE};
    /// use smart_leds::RGB8;
    ///
    /// let mut frame: Frame = [RGB8::default(); LED_COUNT];
    /// HEX_LAYOUT.paint_face(&mut frame, &SMILE, RGB8::new(100, 0, 100));
    /// assert_eq!(frame[7], RGB8::new(100, 0, 100));
    /// ```
    pub fn paint_face(&self, frame: &mut Frame, face: &FaceExpression<'_>, color: RGB8) {
        for &led in face.leds() {
            if let Some(pixel) = frame.get_mut(usize::from(led)) {
                *pixel = color;
            }
        }
    }
}
