//! Face expressions: fixed sets of physical LEDs that light together.
//!
//! Unlike glyphs, faces name LED indices directly, so they do not move with a
//! scroll offset.

use crate::{Error, LED_COUNT, Result};

/// A face drawn on the display, as a list of LED indices.
///
/// ```
/// use hex_face::face::FaceExpression;
///
/// const WINK: FaceExpression<'static> = FaceExpression::new(&[7, 10, 22, 26, 29, 30, 31]);
/// assert!(WINK.contains(10));
/// ```
///
/// Compile-time validation catches configuration errors:
///
/// ```compile_fail
/// # use hex_face::face::FaceExpression;
/// // LED 33 does not exist - caught at compile time
/// static INVALID: FaceExpression<'static> = FaceExpression::new(&[0, 33]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceExpression<'a> {
    leds: &'a [u8],
}

/// Both eyes open and a smile.
pub const SMILE: FaceExpression<'static> = FaceExpression::new(&[7, 9, 21, 27, 29, 30, 31]);

/// Eyes open, flat mouth.
pub const NEUTRAL: FaceExpression<'static> = FaceExpression::new(&[7, 9, 23, 24, 25]);

impl<'a> FaceExpression<'a> {
    /// Constructor: verifies every LED exists and none repeats.
    ///
    /// # Panics
    ///
    /// Panics on an invalid face; in a `const` or `static` this is a build failure.
    #[must_use]
    pub const fn new(leds: &'a [u8]) -> Self {
        assert!(first_out_of_range(leds).is_none(), "face LED is not below LED_COUNT");
        assert!(first_duplicate(leds).is_none(), "duplicate LED in face");
        Self { leds }
    }

    /// Same checks as [`FaceExpression::new`], reported as errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LedOutOfRange`] or [`Error::DuplicateLed`].
    pub fn try_new(leds: &'a [u8]) -> Result<Self> {
        if let Some(led) = first_out_of_range(leds) {
            return Err(Error::LedOutOfRange(led));
        }
        if let Some(led) = first_duplicate(leds) {
            return Err(Error::DuplicateLed(led));
        }
        Ok(Self { leds })
    }

    #[must_use]
    pub const fn leds(&self) -> &'a [u8] {
        self.leds
    }

    #[must_use]
    pub fn contains(&self, led: u8) -> bool {
        self.leds.contains(&led)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.leds.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }
}

#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Index stays below leds.len()."
)]
const fn first_out_of_range(leds: &[u8]) -> Option<u8> {
    let mut i = 0;
    while i < leds.len() {
        if leds[i] as usize >= LED_COUNT {
            return Some(leds[i]);
        }
        i += 1;
    }
    None
}

#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Both indexes stay below leds.len()."
)]
const fn first_duplicate(leds: &[u8]) -> Option<u8> {
    let mut i = 0;
    while i < leds.len() {
        let mut j = i + 1;
        while j < leds.len() {
            if leds[i] == leds[j] {
                return Some(leds[i]);
            }
            j += 1;
        }
        i += 1;
    }
    None
}
