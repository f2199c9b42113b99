// File:    error.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Error types shared by every cipher engine and the cipher facade.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for cipher operations.

use std::fmt;

use thiserror::Error;

use crate::alphabet::print_char_hex;
use crate::cipher::{Direction, Method};

/// Which input of a cipher call carried an invalid symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// The text being encrypted.
    Plaintext,
    /// The text being decrypted.
    Ciphertext,
    /// The cipher key.
    Key,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plaintext => "plaintext",
            Self::Ciphertext => "ciphertext",
            Self::Key => "key",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while validating input or running a cipher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A character outside `'A'..='Z'` appeared where the cipher requires one.
    #[error("non alphabet character 0x{} found in {input}", print_char_hex(*.byte))]
    NonAlphaCharacter {
        /// Where the character was found.
        input: Input,
        /// The offending byte.
        byte: u8,
    },

    /// A generalized substitution input held a byte outside `[0, limit)`.
    #[error("character 0x{} out of range [0, {limit}) in {input}", print_char_hex(*.byte))]
    OutOfRange {
        /// Where the byte was found.
        input: Input,
        /// The offending byte.
        byte: u8,
        /// The alphabet size the byte was checked against.
        limit: u8,
    },

    /// An alphabet is empty or runs past the last byte value.
    #[error(
        "alphabet of {size} symbol(s) starting at 0x{} does not fit in a byte",
        print_char_hex(*.offset)
    )]
    InvalidAlphabet {
        /// Byte value of the first symbol.
        offset: u8,
        /// Requested number of symbols.
        size: u8,
    },

    /// The key does not have the format the cipher expects.
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// Human-readable description of the problem.
        reason: String,
    },

    /// The requested cipher method is not known.
    #[error("method \"{name}\" not supported")]
    UnsupportedMethod {
        /// The name that was requested.
        name: String,
    },

    /// A text length does not fit the shape the cipher needs.
    #[error("text of length {length} does not fit {columns} column(s)")]
    InvalidLength {
        /// Length of the offending text.
        length: usize,
        /// Number of columns the text was expected to fill.
        columns: usize,
    },

    /// A padding count is longer than the text it should be removed from.
    #[error("cannot strip {padding} padding symbol(s) from text of length {length}")]
    InvalidPadding {
        /// Requested padding count.
        padding: usize,
        /// Length of the decrypted text.
        length: usize,
    },

    /// An engine error annotated with the operation that raised it.
    #[error("{direction} with {method} failed: {source}")]
    Operation {
        /// Cipher that was running.
        method: Method,
        /// Whether it was encrypting or decrypting.
        direction: Direction,
        /// The underlying engine error.
        #[source]
        source: Box<CipherError>,
    },
}

impl CipherError {
    pub(crate) fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            reason: reason.into(),
        }
    }

    /// Strips any [`CipherError::Operation`] context and returns the engine error.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Operation { source, .. } => source.root(),
            other => other,
        }
    }
}
