// File:    vigenere.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The Vigenere cipher over the upper-case alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Vigenère cipher limited to upper-case letters (`A-Z`).
//!
//! Each plaintext letter is shifted by the key letter at the same position,
//! with `A = 0`, `B = 1` and so on; the key repeats as often as needed.
//!
//! ```text
//! plaintext:  HELLO
//! key:        B
//! ciphertext: IFMMP
//! ```
//!
//! See <https://en.wikipedia.org/wiki/Vigen%C3%A8re_cipher> for details.

use crate::Result;
use crate::alphabet::UPPER_ALPHA;
use crate::substitution;

/// Encrypts `plaintext` with the Vigenère keyword `key`.
///
/// # Errors
///
/// Returns [`crate::CipherError::InvalidKey`] for an empty key and
/// [`crate::CipherError::NonAlphaCharacter`] if the key or plaintext holds
/// anything other than `A-Z`.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    substitution::encrypt_in(UPPER_ALPHA, key, plaintext)
}

/// Decrypts `ciphertext` with the Vigenère keyword `key` used to encrypt it.
///
/// # Errors
///
/// Returns [`crate::CipherError::InvalidKey`] for an empty key and
/// [`crate::CipherError::NonAlphaCharacter`] if the key or ciphertext holds
/// anything other than `A-Z`.
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    substitution::decrypt_in(UPPER_ALPHA, key, ciphertext)
}
