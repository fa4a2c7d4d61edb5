//! A fixed, validated set of glyphs and the lookup over it.
//!
//! See [`GlyphTable`] for building tables at compile time and at runtime.

use crate::{Error, Glyph, MAX_CHAR_INDICES, Result};

/// An immutable set of at most [`MAX_CHAR_INDICES`] glyphs with unique characters.
///
/// The table borrows its glyphs, so a `static` table costs nothing beyond the glyph
/// data itself. [`GlyphTable::new`] is a `const fn`:
///
/// ```
/// use hex_face::{Glyph, GlyphTable};
///
/// const A: Glyph = Glyph::new(
///     'A',
///     [0b0_0111_0000, 0b0_1000_1000, 0b0_1111_1000, 0b0_1000_1000, 0b0_1000_1000],
/// );
/// const DEFINED: [Glyph; 1] = [A];
/// static GLYPHS: GlyphTable<'static> = GlyphTable::new(&DEFINED);
///
/// assert!(GLYPHS.lookup('A').is_some());
/// assert!(GLYPHS.lookup('Z').is_none());
/// ```
///
/// Invalid tables are caught at compile time:
///
/// ```compile_fail
/// use hex_face::{Glyph, GlyphTable};
///
/// // Duplicate character 'A' - caught at compile time
/// const TWICE: [Glyph; 2] = [Glyph::new('A', [0; 5]), Glyph::new('A', [1; 5])];
/// static INVALID: GlyphTable<'static> = GlyphTable::new(&TWICE);
/// ```
///
/// ```compile_fail
/// use hex_face::{Glyph, GlyphTable};
///
/// // 26 glyphs, one more than MAX_CHAR_INDICES
/// const LETTERS: [Glyph; 26] = {
///     let mut glyphs = [Glyph::new('a', [0; 5]); 26];
///     let mut i = 0;
///     while i < 26 {
///         glyphs[i] = Glyph::new((b'a' + i as u8) as char, [0; 5]);
///         i += 1;
///     }
///     glyphs
/// };
/// static INVALID: GlyphTable<'static> = GlyphTable::new(&LETTERS);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphTable<'a> {
    glyphs: &'a [Glyph],
}

impl<'a> GlyphTable<'a> {
    /// Constructor: verifies the size limit and that no character appears twice.
    ///
    /// # Panics
    ///
    /// Panics on an invalid table. In a `const` or `static` initializer this is a
    /// build failure; use [`GlyphTable::try_new`] for data loaded at runtime.
    #[must_use]
    pub const fn new(glyphs: &'a [Glyph]) -> Self {
        assert!(
            glyphs.len() <= MAX_CHAR_INDICES,
            "glyph table holds more than MAX_CHAR_INDICES glyphs"
        );
        assert!(
            first_duplicate(glyphs).is_none(),
            "duplicate character in glyph table"
        );
        Self { glyphs }
    }

    /// Same checks as [`GlyphTable::new`], reported as errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableOverflow`] when there are more than [`MAX_CHAR_INDICES`]
    /// glyphs, and [`Error::DuplicateCharacter`] when a character repeats.
    pub fn try_new(glyphs: &'a [Glyph]) -> Result<Self> {
        if glyphs.len() > MAX_CHAR_INDICES {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            defmt::warn!("GlyphTable::try_new: {} glyphs exceed the limit", glyphs.len());
            return Err(Error::TableOverflow {
                count: glyphs.len(),
            });
        }
        if let Some(character) = first_duplicate(glyphs) {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            defmt::warn!("GlyphTable::try_new: duplicate glyph {}", character);
            return Err(Error::DuplicateCharacter(character));
        }
        Ok(Self { glyphs })
    }

    /// The glyph for `character`, or `None` when the table has no such glyph.
    ///
    /// Missing glyphs are expected; the renderer decides whether to skip, blank, or
    /// substitute.
    #[must_use]
    pub fn lookup(&self, character: char) -> Option<&'a Glyph> {
        self.glyphs
            .iter()
            .find(|glyph| glyph.character() == character)
    }

    /// Like [`GlyphTable::lookup`], for callers that want to use `?`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GlyphNotFound`] if the table has no glyph for `character`.
    pub fn get(&self, character: char) -> Result<&'a Glyph> {
        self.lookup(character)
            .ok_or(Error::GlyphNotFound(character))
    }

    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.lookup(character).is_some()
    }

    /// Every defined character, in table order.
    pub fn characters(&self) -> impl Iterator<Item = char> + use<'a> {
        self.glyphs.iter().map(Glyph::character)
    }

    pub fn iter(&self) -> core::slice::Iter<'a, Glyph> {
        self.glyphs.iter()
    }

    #[must_use]
    pub const fn as_slice(&self) -> &'a [Glyph] {
        self.glyphs
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl<'a> IntoIterator for GlyphTable<'a> {
    type Item = &'a Glyph;
    type IntoIter = core::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

impl<'a> IntoIterator for &GlyphTable<'a> {
    type Item = &'a Glyph;
    type IntoIter = core::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Both indexes stay below glyphs.len(), and const fn cannot use iterators."
)]
const fn first_duplicate(glyphs: &[Glyph]) -> Option<char> {
    let mut i = 0;
    while i < glyphs.len() {
        let mut j = i + 1;
        while j < glyphs.len() {
            if glyphs[i].character() == glyphs[j].character() {
                return Some(glyphs[i].character());
            }
            j += 1;
        }
        i += 1;
    }
    None
}
