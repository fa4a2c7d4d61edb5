//! Glyph tables loaded at runtime from `postcard` bytes.
//!
//! The encoding is a postcard sequence of glyphs: a varint count followed by each
//! glyph's character and its five row masks.

use heapless::Vec;

use crate::{Error, Glyph, GlyphTable, MAX_CHAR_INDICES, Result};

/// An owned, validated set of glyphs. Borrow it as a [`GlyphTable`] with [`GlyphPack::table`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphPack {
    glyphs: Vec<Glyph, MAX_CHAR_INDICES>,
}

impl GlyphPack {
    /// Copy `glyphs` into a pack after the same checks as [`GlyphTable::try_new`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableOverflow`] or [`Error::DuplicateCharacter`].
    pub fn from_glyphs(glyphs: &[Glyph]) -> Result<Self> {
        GlyphTable::try_new(glyphs)?;
        let glyphs = Vec::from_slice(glyphs).map_err(|()| Error::TableOverflow {
            count: glyphs.len(),
        })?;
        Ok(Self { glyphs })
    }

    /// Decode and validate a pack.
    ///
    /// ```
    /// use hex_face::{Error, Glyph, GlyphPack};
    ///
    /// let pack = GlyphPack::from_glyphs(&[Glyph::new('A', [0b1_0000; 5])])?;
    /// let mut buffer = [0_u8; 64];
    /// let bytes = pack.to_slice(&mut buffer)?;
    ///
    /// let loaded = GlyphPack::from_bytes(bytes)?;
    /// assert_eq!(loaded.table().lookup('A'), pack.table().lookup('A'));
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableOverflow`] when the encoded count is above
    /// [`MAX_CHAR_INDICES`], [`Error::DuplicateCharacter`] when a character repeats,
    /// [`Error::PackTrailingBytes`] when bytes follow the last glyph, and
    /// [`Error::PackDecode`] for malformed bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        // The sequence length is a varint(usize) prefix; check it before decoding any glyph.
        let (count, _) = postcard::take_from_bytes::<usize>(bytes).map_err(Error::PackDecode)?;
        if count > MAX_CHAR_INDICES {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            defmt::warn!("GlyphPack::from_bytes: {} glyphs exceed the limit", count);
            return Err(Error::TableOverflow { count });
        }

        let (glyphs, rest): (Vec<Glyph, MAX_CHAR_INDICES>, _) =
            postcard::take_from_bytes(bytes).map_err(Error::PackDecode)?;
        if !rest.is_empty() {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            defmt::warn!("GlyphPack::from_bytes: {} trailing bytes", rest.len());
            return Err(Error::PackTrailingBytes { count: rest.len() });
        }
        GlyphTable::try_new(&glyphs)?;

        #[cfg(all(feature = "defmt", target_os = "none"))]
        defmt::debug!("GlyphPack::from_bytes: loaded {} glyphs", glyphs.len());
        Ok(Self { glyphs })
    }

    /// Encode into `buffer`, returning the used part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PackEncode`] if `buffer` is too small.
    pub fn to_slice<'b>(&self, buffer: &'b mut [u8]) -> Result<&'b mut [u8]> {
        postcard::to_slice(&self.glyphs, buffer).map_err(Error::PackEncode)
    }

    #[must_use]
    pub fn table(&self) -> GlyphTable<'_> {
        // Validated on the way in; the checks cannot fail here.
        GlyphTable::new(&self.glyphs)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
