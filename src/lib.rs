//! Glyph bitmaps for the robot's 33-LED hexagonal face display.
//!
//! A [`Glyph`] is one character and five row masks. Glyphs live in an immutable
//! [`GlyphTable`]; the built-in [`font::FONT`] is a `static` table read through
//! [`lookup`]. [`HEX_LAYOUT`] turns row masks into physical LED indices for the
//! renderer, [`FaceExpression`] names fixed LED sets for faces, and [`GlyphPack`]
//! loads extra tables at runtime.
//!
//! ```
//! use hex_face::{HEX_LAYOUT, lookup};
//!
//! match lookup('1') {
//!     Some(glyph) => assert_eq!(HEX_LAYOUT.lit_leds(glyph, 0).len(), 8),
//!     None => unreachable!("'1' is built in"),
//! }
//! ```
#![no_std]

mod error;
pub mod face;
pub mod font;
mod glyph;
pub mod glyph_pack;
pub mod glyph_table;
pub mod led_layout;
mod shared_constants;

// Re-export commonly used items
pub use error::{Error, Result};
pub use face::FaceExpression;
pub use font::lookup;
pub use glyph::{Glyph, RowMask};
pub use glyph_pack::GlyphPack;
pub use glyph_table::GlyphTable;
pub use led_layout::{Frame, HEX_LAYOUT, HexLayout};
pub use shared_constants::*;
