// File:    caesar.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The Caesar cipher, a Vigenere cipher with a one-letter key.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Caesar cipher limited to upper-case letters (`A-Z`).
//!
//! The offset is given by a letter, starting at zero: `A = 0`, `B = 1`,
//! `C = 2`, and so on.
//!
//! ```text
//! plaintext:  HELLOWORLD
//! key:        B
//! ciphertext: IFMMPXPSME
//! ```

use crate::{Result, vigenere};

/// Encrypts `plaintext` by shifting every letter by `key`.
///
/// # Errors
///
/// Returns [`crate::CipherError::NonAlphaCharacter`] if the key or the
/// plaintext holds anything other than `A-Z`.
pub fn encrypt(key: u8, plaintext: &[u8]) -> Result<Vec<u8>> {
    vigenere::encrypt(&[key], plaintext)
}

/// Decrypts `ciphertext` that was shifted by `key`.
///
/// # Errors
///
/// Returns [`crate::CipherError::NonAlphaCharacter`] if the key or the
/// ciphertext holds anything other than `A-Z`.
pub fn decrypt(key: u8, ciphertext: &[u8]) -> Result<Vec<u8>> {
    vigenere::decrypt(&[key], ciphertext)
}
