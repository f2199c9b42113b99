// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Character-class checks, key inversion and alphabet range helpers used by the ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Alphabet utilities shared by every cipher.
//!
//! An [`Alphabet`] is a contiguous run of `size` byte values starting at
//! `offset`. The substitution engine works on offsets in `[0, size)`; an
//! alphabet translates text into that range and back.

use crate::error::{CipherError, Input};
use crate::Result;

/// A contiguous byte alphabet of `size` symbols beginning at `offset`.
///
/// The alphabet is never empty and never runs past `0xff`, so every offset
/// in `[0, size)` maps back to a symbol of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    offset: u8,
    size: u8,
}

/// The 26 upper-case letters `'A'..='Z'`.
pub const UPPER_ALPHA: Alphabet = Alphabet {
    offset: b'A',
    size: 26,
};

impl Alphabet {
    /// Creates the alphabet of `size` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidAlphabet`] if `size` is zero or the last
    /// symbol would lie past `0xff`.
    pub fn new(offset: u8, size: u8) -> Result<Self> {
        if size == 0 || u16::from(offset) + u16::from(size) > 256 {
            return Err(CipherError::InvalidAlphabet { offset, size });
        }
        Ok(Self { offset, size })
    }

    /// The byte value of the first symbol.
    #[must_use]
    pub const fn offset(self) -> u8 {
        self.offset
    }

    /// The number of symbols in the alphabet.
    #[must_use]
    pub const fn size(self) -> u8 {
        self.size
    }

    /// Returns true if `byte` is a symbol of this alphabet.
    #[must_use]
    pub const fn contains(self, byte: u8) -> bool {
        byte >= self.offset && byte - self.offset < self.size
    }

    /// Checks that every byte of `text` belongs to the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::NonAlphaCharacter`] naming `input` and the first
    /// byte that falls outside the alphabet.
    pub fn check(self, text: &[u8], input: Input) -> Result<()> {
        match text.iter().find(|&&byte| !self.contains(byte)) {
            Some(&byte) => Err(CipherError::NonAlphaCharacter { input, byte }),
            None => Ok(()),
        }
    }

    /// Shifts alphabet symbols down into the range `[0, size)`.
    ///
    /// Callers validate with [`Alphabet::check`] first; bytes below `offset`
    /// wrap.
    #[must_use]
    pub fn to_offsets(self, text: &[u8]) -> Vec<u8> {
        text.iter().map(|&byte| byte.wrapping_sub(self.offset)).collect()
    }

    /// Shifts offsets in `[0, size)` back up into alphabet symbols.
    ///
    /// Offsets at or above `size` wrap.
    #[must_use]
    pub fn from_offsets(self, offsets: &[u8]) -> Vec<u8> {
        offsets
            .iter()
            .map(|&offset| offset.wrapping_add(self.offset))
            .collect()
    }
}

/// Check if a given character is an upper-case letter.
#[must_use]
pub const fn is_upper_alpha(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// Check if a given character is a lower-case letter.
#[must_use]
pub const fn is_lower_alpha(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Check if every character of `text` is an upper-case letter.
#[must_use]
pub fn all_upper_alpha(text: &[u8]) -> bool {
    text.iter().all(|&c| is_upper_alpha(c))
}

/// Formats a byte as two lower-case hexadecimal digits.
#[must_use]
pub fn print_char_hex(c: u8) -> String {
    format!("{c:02x}")
}

/// Inverts an upper-case key so that it undoes the original key's shift.
///
/// Each letter `x` becomes `(26 - x) mod 26`, so `A` maps to itself and the
/// operation is its own inverse. Bytes outside `'A'..='Z'` are not validated
/// here.
#[must_use]
pub fn invert_key(key: &[u8]) -> Vec<u8> {
    let offsets = UPPER_ALPHA.to_offsets(key);
    UPPER_ALPHA.from_offsets(&negate_offsets(&offsets, UPPER_ALPHA.size))
}

/// Returns the additive inverse `(size - s) mod size` of every offset.
///
/// Every offset must already lie in `[0, size)`.
#[must_use]
pub fn negate_offsets(offsets: &[u8], size: u8) -> Vec<u8> {
    offsets
        .iter()
        .map(|&s| size.wrapping_sub(s).checked_rem(size).unwrap_or(0))
        .collect()
}

/// Check that every byte of `text` lies in `[0, max)`.
#[must_use]
pub fn check_range(text: &[u8], max: u8) -> bool {
    text.iter().all(|&c| c < max)
}

/// Removes leading whitespace from `s` in place.
pub fn trim_start_in_place(s: &mut String) {
    let start = s.len() - s.trim_start().len();
    s.drain(..start);
}

/// Removes trailing whitespace from `s` in place.
pub fn trim_end_in_place(s: &mut String) {
    let end = s.trim_end().len();
    s.truncate(end);
}

/// Removes leading and trailing whitespace from `s` in place.
pub fn trim_in_place(s: &mut String) {
    trim_end_in_place(s);
    trim_start_in_place(s);
}

/// Removes trailing ASCII whitespace from a byte buffer in place.
pub fn trim_end_bytes(text: &mut Vec<u8>) {
    let end = text.trim_ascii_end().len();
    text.truncate(end);
}
