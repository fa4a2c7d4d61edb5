//! Built-in 5×5 font for the hexagonal face display.
//!
//! Every glyph sits in grid columns 2..=6, the only columns that have an LED in
//! every row. The set covers digits and the punctuation needed to show an IP
//! address, plus the capital letters that fit in the remaining slots.

use crate::{Glyph, GlyphTable, ROWS, glyph::RowMask};

/// First grid column of the 5×5 glyph box.
const FIRST_COLUMN: u32 = 2;

/// The built-in glyph table.
pub static FONT: GlyphTable<'static> = GlyphTable::new(&GLYPHS);

/// Look up `character` in the built-in [`FONT`].
///
/// ```
/// assert!(hex_face::lookup('8').is_some());
/// assert!(hex_face::lookup('z').is_none());
/// ```
#[must_use]
pub fn lookup(character: char) -> Option<&'static Glyph> {
    FONT.lookup(character)
}

const GLYPHS: [Glyph; 25] = [
    Glyphs::DIGIT_0,
    Glyphs::DIGIT_1,
    Glyphs::DIGIT_2,
    Glyphs::DIGIT_3,
    Glyphs::DIGIT_4,
    Glyphs::DIGIT_5,
    Glyphs::DIGIT_6,
    Glyphs::DIGIT_7,
    Glyphs::DIGIT_8,
    Glyphs::DIGIT_9,
    Glyphs::DOT,
    Glyphs::COLON,
    Glyphs::DASH,
    Glyphs::EXCLAMATION,
    Glyphs::QUESTION,
    Glyphs::A,
    Glyphs::C,
    Glyphs::E,
    Glyphs::H,
    Glyphs::I,
    Glyphs::L,
    Glyphs::O,
    Glyphs::P,
    Glyphs::R,
    Glyphs::S,
];

struct Glyphs;

impl Glyphs {
    const DIGIT_0: Glyph = glyph('0', [".###.", "#..##", "#.#.#", "##..#", ".###."]);
    const DIGIT_1: Glyph = glyph('1', ["..#..", ".##..", "..#..", "..#..", ".###."]);
    const DIGIT_2: Glyph = glyph('2', [".###.", "#...#", "..##.", ".#...", "#####"]);
    const DIGIT_3: Glyph = glyph('3', ["####.", "....#", ".###.", "....#", "####."]);
    const DIGIT_4: Glyph = glyph('4', ["#..#.", "#..#.", "#####", "...#.", "...#."]);
    const DIGIT_5: Glyph = glyph('5', ["#####", "#....", "####.", "....#", "####."]);
    const DIGIT_6: Glyph = glyph('6', [".###.", "#....", "####.", "#...#", ".###."]);
    const DIGIT_7: Glyph = glyph('7', ["#####", "...#.", "..#..", ".#...", ".#..."]);
    const DIGIT_8: Glyph = glyph('8', [".###.", "#...#", ".###.", "#...#", ".###."]);
    const DIGIT_9: Glyph = glyph('9', [".###.", "#...#", ".####", "....#", ".###."]);

    const DOT: Glyph = glyph('.', [".....", ".....", ".....", ".....", "..#.."]);
    const COLON: Glyph = glyph(':', [".....", "..#..", ".....", "..#..", "....."]);
    const DASH: Glyph = glyph('-', [".....", ".....", ".###.", ".....", "....."]);
    const EXCLAMATION: Glyph = glyph('!', ["..#..", "..#..", "..#..", ".....", "..#.."]);
    const QUESTION: Glyph = glyph('?', [".###.", "#...#", "..##.", ".....", "..#.."]);

    const A: Glyph = glyph('A', [".###.", "#...#", "#####", "#...#", "#...#"]);
    const C: Glyph = glyph('C', [".####", "#....", "#....", "#....", ".####"]);
    const E: Glyph = glyph('E', ["#####", "#....", "####.", "#....", "#####"]);
    const H: Glyph = glyph('H', ["#...#", "#...#", "#####", "#...#", "#...#"]);
    const I: Glyph = glyph('I', [".###.", "..#..", "..#..", "..#..", ".###."]);
    const L: Glyph = glyph('L', ["#....", "#....", "#....", "#....", "#####"]);
    const O: Glyph = glyph('O', [".###.", "#...#", "#...#", "#...#", ".###."]);
    const P: Glyph = glyph('P', ["####.", "#...#", "####.", "#....", "#...."]);
    const R: Glyph = glyph('R', ["####.", "#...#", "####.", "#..#.", "#...#"]);
    const S: Glyph = glyph('S', [".####", "#....", ".###.", "....#", "####."]);
}

/// Build a glyph from row art: `#` is lit, `.` is dark, the leftmost byte is [`FIRST_COLUMN`].
#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Indexes stay below ROWS and the row length; shifts are bounded by the length assert."
)]
const fn glyph(character: char, art: [&str; ROWS]) -> Glyph {
    let mut bitmap: [RowMask; ROWS] = [0; ROWS];
    let mut row_index = 0;
    while row_index < ROWS {
        let bytes = art[row_index].as_bytes();
        assert!(
            bytes.len() + FIRST_COLUMN as usize <= RowMask::BITS as usize,
            "glyph row is wider than a row mask"
        );
        let mut column_index = 0;
        while column_index < bytes.len() {
            match bytes[column_index] {
                b'#' => bitmap[row_index] |= 1 << (FIRST_COLUMN as usize + column_index),
                b'.' => {}
                _ => panic!("glyph art uses only '#' and '.'"),
            }
            column_index += 1;
        }
        row_index += 1;
    }
    Glyph::new(character, bitmap)
}
