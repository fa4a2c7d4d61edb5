use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested character has no glyph. Callers usually pick a fallback instead.
    #[display("No glyph for {_0:?}")]
    GlyphNotFound(#[error(not(source))] char),

    /// More glyphs than `MAX_CHAR_INDICES`.
    #[display("Glyph table holds {count} glyphs, more than allowed")]
    TableOverflow { count: usize },

    /// Two glyphs share the same character.
    #[display("Duplicate glyph for {_0:?}")]
    DuplicateCharacter(#[error(not(source))] char),

    /// A face names an LED index at or past `LED_COUNT`.
    #[display("LED {_0} is not on the face")]
    LedOutOfRange(#[error(not(source))] u8),

    /// A face names the same LED twice.
    #[display("Duplicate LED {_0} in face")]
    DuplicateLed(#[error(not(source))] u8),

    // `#[error(not(source))]` below tells `derive_more` not to treat `postcard::Error` as the
    // source. It only implements `core::error::Error` with some of postcard's features.
    /// Glyph pack bytes are malformed or truncated.
    #[display("Glyph pack decode failed: {_0:?}")]
    PackDecode(#[error(not(source))] postcard::Error),

    /// Bytes are left over after the last glyph of a pack.
    #[display("Glyph pack has {count} unexpected trailing bytes")]
    PackTrailingBytes { count: usize },

    /// The buffer is too small for the encoded pack.
    #[display("Glyph pack encode failed: {_0:?}")]
    PackEncode(#[error(not(source))] postcard::Error),
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn pack_errors_clone_and_compare() {
        let error = Error::PackDecode(postcard::Error::DeserializeUnexpectedEnd);
        assert_eq!(error.clone(), error);
        assert_ne!(error, Error::PackEncode(postcard::Error::DeserializeUnexpectedEnd));
    }

    #[test]
    fn trailing_bytes_display() {
        let mut text = heapless::String::<64>::new();
        core::fmt::write(&mut text, format_args!("{}", Error::PackTrailingBytes { count: 4 }))
            .expect("message fits");
        assert_eq!(text.as_str(), "Glyph pack has 4 unexpected trailing bytes");
    }
}
