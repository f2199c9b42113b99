// File:    substitution.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The generalized modular substitution engine behind the Caesar and Vigenere ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Generalized Vigenère substitution over an alphabet of `N` symbols.
//!
//! Symbols here are raw offsets in `[0, N)`, not characters. Each output
//! symbol is `(plaintext[i] + key[i mod len(key)]) mod N`, so decryption is
//! encryption with every key symbol replaced by its additive inverse.

use log::trace;

use crate::Result;
use crate::alphabet::{Alphabet, check_range, negate_offsets};
use crate::error::{CipherError, Input};

/// Encrypts `plaintext` with `key` over an alphabet of `alphabet_size` symbols.
///
/// The key cycles over the plaintext; its length does not need to divide
/// the plaintext length.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty, and
/// [`CipherError::OutOfRange`] if any plaintext or key byte is not below
/// `alphabet_size`.
pub fn encrypt_generalized(key: &[u8], plaintext: &[u8], alphabet_size: u8) -> Result<Vec<u8>> {
    check_offsets(plaintext, alphabet_size, Input::Plaintext)?;
    check_key_offsets(key, alphabet_size)?;
    Ok(shift(key, plaintext, alphabet_size))
}

/// Decrypts `ciphertext` produced by [`encrypt_generalized`] with the same key.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty, and
/// [`CipherError::OutOfRange`] if any ciphertext or key byte is not below
/// `alphabet_size`.
pub fn decrypt_generalized(key: &[u8], ciphertext: &[u8], alphabet_size: u8) -> Result<Vec<u8>> {
    check_offsets(ciphertext, alphabet_size, Input::Ciphertext)?;
    check_key_offsets(key, alphabet_size)?;
    let inverse = negate_offsets(key, alphabet_size);
    Ok(shift(&inverse, ciphertext, alphabet_size))
}

/// Encrypts alphabet symbols by running the generalized engine on their offsets.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty, and
/// [`CipherError::NonAlphaCharacter`] if the key or plaintext holds a byte
/// outside `alphabet`.
pub fn encrypt_in(alphabet: Alphabet, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    check_symbols(alphabet, key, plaintext, Input::Plaintext)?;
    let offsets = shift(
        &alphabet.to_offsets(key),
        &alphabet.to_offsets(plaintext),
        alphabet.size(),
    );
    Ok(alphabet.from_offsets(&offsets))
}

/// Decrypts alphabet symbols produced by [`encrypt_in`] with the same key.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty, and
/// [`CipherError::NonAlphaCharacter`] if the key or ciphertext holds a byte
/// outside `alphabet`.
pub fn decrypt_in(alphabet: Alphabet, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    check_symbols(alphabet, key, ciphertext, Input::Ciphertext)?;
    let inverse = negate_offsets(&alphabet.to_offsets(key), alphabet.size());
    let offsets = shift(&inverse, &alphabet.to_offsets(ciphertext), alphabet.size());
    Ok(alphabet.from_offsets(&offsets))
}

// y = (x + k) % size, with k cycling over the key.
// Inputs are already range checked, so the key is non-empty and the sum
// of two offsets below `size` fits in a u16.
fn shift(key: &[u8], text: &[u8], size: u8) -> Vec<u8> {
    trace!(
        "shifting {} symbol(s) with a {}-symbol key over {size} symbols",
        text.len(),
        key.len()
    );
    let size = u16::from(size);
    text.iter()
        .zip(key.iter().cycle())
        .map(|(&x, &k)| {
            let y = (u16::from(x) + u16::from(k)) % size;
            // y < size <= u8::MAX
            u8::try_from(y).unwrap_or(u8::MAX)
        })
        .collect()
}

fn check_offsets(text: &[u8], limit: u8, input: Input) -> Result<()> {
    if check_range(text, limit) {
        return Ok(());
    }
    let byte = text.iter().copied().find(|&byte| byte >= limit).unwrap_or(limit);
    Err(CipherError::OutOfRange { input, byte, limit })
}

fn check_key_offsets(key: &[u8], limit: u8) -> Result<()> {
    if key.is_empty() {
        return Err(CipherError::invalid_key("key must not be empty"));
    }
    check_offsets(key, limit, Input::Key)
}

fn check_symbols(alphabet: Alphabet, key: &[u8], text: &[u8], input: Input) -> Result<()> {
    if key.is_empty() {
        return Err(CipherError::invalid_key("key must not be empty"));
    }
    alphabet.check(key, Input::Key)?;
    alphabet.check(text, input)
}
