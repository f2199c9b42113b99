// File:    cipher.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Per-cipher entry points that validate keys and dispatch to the cipher engines.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The cipher facade.
//!
//! A [`Method`] names a cipher, and [`Cipher`] pairs a method with a parsed
//! key of the right type for it. Errors raised by the engines are wrapped in
//! [`CipherError::Operation`] so callers know which cipher and direction
//! failed.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Input};
use crate::{Result, alphabet, caesar, columnar, rail_fence, scytale, vigenere};

/// The supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Single-letter shift.
    Caesar,
    /// Repeating keyword shift.
    Vigenere,
    /// Zig-zag transposition over a number of rails.
    RailFence,
    /// Fixed-width column transposition.
    Scytale,
    /// Keyword-ordered column transposition.
    Columnar,
}

impl Method {
    /// Every supported method, in the order they are listed to users.
    pub const ALL: [Self; 5] = [
        Self::Caesar,
        Self::Vigenere,
        Self::RailFence,
        Self::Scytale,
        Self::Columnar,
    ];

    /// The name used to select this method, e.g. `"railfence"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Vigenere => "vigenere",
            Self::RailFence => "railfence",
            Self::Scytale => "scytale",
            Self::Columnar => "columnar",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| CipherError::UnsupportedMethod { name: s.to_owned() })
    }
}

/// Whether a cipher is encrypting or decrypting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Encrypt => "encryption",
            Self::Decrypt => "decryption",
        })
    }
}

/// The result of an encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    /// The encrypted symbols.
    pub text: Vec<u8>,
    /// How many filler symbols were appended to the plaintext before
    /// encrypting. Always zero except for [`Method::Columnar`].
    pub padding: usize,
}

impl Ciphertext {
    /// Removes `padding` trailing filler symbols from a decrypted text.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidPadding`] if `padding` is longer than the text.
    pub fn strip_padding(mut plaintext: Vec<u8>, padding: usize) -> Result<Vec<u8>> {
        let length = plaintext.len();
        let Some(end) = length.checked_sub(padding) else {
            return Err(CipherError::InvalidPadding { padding, length });
        };
        plaintext.truncate(end);
        Ok(plaintext)
    }
}

/// A cipher together with a key of the type it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    /// Caesar shift by a single letter.
    Caesar(u8),
    /// Vigenère with a keyword of upper-case letters.
    Vigenere(Vec<u8>),
    /// Rail Fence with a number of rails.
    RailFence(usize),
    /// Scytale with a row width.
    Scytale(usize),
    /// Columnar with a keyword ordering the columns.
    Columnar(Vec<u8>),
}

impl Cipher {
    /// Parses a textual key into the key type `method` needs.
    ///
    /// Trailing whitespace is ignored. Caesar takes a single letter, Vigenère
    /// a non-empty run of letters, Rail Fence and Scytale a single digit
    /// `1`-`9`, and Columnar any non-empty keyword.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the key has the wrong shape and
    /// [`CipherError::NonAlphaCharacter`] if a letter key holds a non-letter.
    pub fn from_key(method: Method, key: &str) -> Result<Self> {
        let key = key.trim_end().as_bytes();
        let cipher = match method {
            Method::Caesar => match key {
                [letter] => {
                    alphabet::UPPER_ALPHA.check(key, Input::Key)?;
                    Self::Caesar(*letter)
                }
                _ => {
                    return Err(CipherError::invalid_key(format!(
                        "caesar key must be a single letter, got {} character(s)",
                        key.len()
                    )));
                }
            },
            Method::Vigenere => {
                if key.is_empty() {
                    return Err(CipherError::invalid_key("vigenere key must not be empty"));
                }
                alphabet::UPPER_ALPHA.check(key, Input::Key)?;
                Self::Vigenere(key.to_vec())
            }
            Method::RailFence => Self::RailFence(parse_count(key, "number of rails")?),
            Method::Scytale => Self::Scytale(parse_count(key, "row width")?),
            Method::Columnar => {
                if key.is_empty() {
                    return Err(CipherError::invalid_key("columnar key must not be empty"));
                }
                Self::Columnar(key.to_vec())
            }
        };
        debug!("parsed {method} key");
        Ok(cipher)
    }

    /// Parses both the method name and its key.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::UnsupportedMethod`] for an unknown method name,
    /// and otherwise the errors of [`Cipher::from_key`].
    pub fn parse(method: &str, key: &str) -> Result<Self> {
        Self::from_key(method.parse()?, key)
    }

    /// The method this cipher runs.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::Caesar(_) => Method::Caesar,
            Self::Vigenere(_) => Method::Vigenere,
            Self::RailFence(_) => Method::RailFence,
            Self::Scytale(_) => Method::Scytale,
            Self::Columnar(_) => Method::Columnar,
        }
    }

    /// Encrypts `plaintext`. Only Columnar draws from `rng`, for padding.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Operation`] wrapping the engine's validation error.
    pub fn encrypt<R: Rng + ?Sized>(&self, plaintext: &[u8], rng: &mut R) -> Result<Ciphertext> {
        let unpadded = |text: Result<Vec<u8>>| text.map(|text| Ciphertext { text, padding: 0 });
        let result = match self {
            Self::Caesar(key) => unpadded(caesar::encrypt(*key, plaintext)),
            Self::Vigenere(key) => unpadded(vigenere::encrypt(key, plaintext)),
            Self::RailFence(rails) => unpadded(rail_fence::encrypt(*rails, plaintext)),
            Self::Scytale(width) => unpadded(scytale::encrypt(*width, plaintext)),
            Self::Columnar(key) => columnar::encrypt(key, plaintext, rng),
        };
        result.map_err(|e| self.context(Direction::Encrypt, e))
    }

    /// Decrypts `ciphertext`. Columnar output keeps its padding.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Operation`] wrapping the engine's validation error.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let result = match self {
            Self::Caesar(key) => caesar::decrypt(*key, ciphertext),
            Self::Vigenere(key) => vigenere::decrypt(key, ciphertext),
            Self::RailFence(rails) => rail_fence::decrypt(*rails, ciphertext),
            Self::Scytale(width) => scytale::decrypt(*width, ciphertext),
            Self::Columnar(key) => columnar::decrypt(key, ciphertext),
        };
        result.map_err(|e| self.context(Direction::Decrypt, e))
    }

    /// Decrypts `ciphertext` and removes `padding` trailing filler symbols.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Operation`] wrapping the engine's validation
    /// error, including [`CipherError::InvalidPadding`] if `padding` exceeds
    /// the decrypted length.
    pub fn decrypt_unpadded(&self, ciphertext: &[u8], padding: usize) -> Result<Vec<u8>> {
        let plaintext = self.decrypt(ciphertext)?;
        Ciphertext::strip_padding(plaintext, padding)
            .map_err(|e| self.context(Direction::Decrypt, e))
    }

    fn context(&self, direction: Direction, source: CipherError) -> CipherError {
        CipherError::Operation {
            method: self.method(),
            direction,
            source: Box::new(source),
        }
    }
}

// A single decimal digit 1-9.
fn parse_count(key: &[u8], what: &str) -> Result<usize> {
    match key {
        [digit @ b'1'..=b'9'] => Ok(usize::from(digit - b'0')),
        _ => Err(CipherError::invalid_key(format!(
            "{what} must be a single digit 1-9, got \"{}\"",
            String::from_utf8_lossy(key)
        ))),
    }
}
