// File:    scytale.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The Scytale transposition cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Scytale cipher.
//!
//! The key is the width of the rows of text. The plaintext is written into
//! rows of that width and read back down each column:
//!
//! ```text
//! Key is 5, plaintext GOODMORNINGWORLDANDALLWHOINHABITIT
//!
//!     G O O D M
//!     O R N I N
//!     G W O R L
//!     D A N D A
//!     L L W H O
//!     I N H A B
//!     I T I T
//!
//! ciphertext: GOGDLII ORWALNT ONONWHI DIRDHAT MNLAOB
//! ```
//!
//! The cipher only moves bytes around, so any byte values are accepted.
//! See <https://en.wikipedia.org/wiki/Scytale>.

use std::iter;

use log::debug;

use crate::Result;
use crate::error::CipherError;

/// Encrypts `plaintext` written in rows of `row_width` symbols.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `row_width` is zero.
pub fn encrypt(row_width: usize, plaintext: &[u8]) -> Result<Vec<u8>> {
    check_width(row_width)?;
    debug!("scytale encrypt: width {row_width}, {} symbol(s)", plaintext.len());
    Ok(column_walk(row_width, plaintext.len())
        .map(|index| plaintext[index])
        .collect())
}

/// Decrypts `ciphertext` that was encrypted with rows of `row_width` symbols.
///
/// When the last row is full this is the same as encrypting with the column
/// height as the width; the walk below also handles a short last row.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `row_width` is zero.
pub fn decrypt(row_width: usize, ciphertext: &[u8]) -> Result<Vec<u8>> {
    check_width(row_width)?;
    debug!(
        "scytale decrypt: width {row_width}, column height {}",
        column_height(row_width, ciphertext.len())
    );
    let mut plaintext = vec![0u8; ciphertext.len()];
    for (&symbol, index) in ciphertext.iter().zip(column_walk(row_width, ciphertext.len())) {
        plaintext[index] = symbol;
    }
    Ok(plaintext)
}

/// Number of rows needed to hold `len` symbols in rows of `row_width`.
#[must_use]
pub const fn column_height(row_width: usize, len: usize) -> usize {
    if row_width == 0 { 0 } else { len.div_ceil(row_width) }
}

fn check_width(row_width: usize) -> Result<()> {
    if row_width == 0 {
        return Err(CipherError::invalid_key("row width must be > 0"));
    }
    Ok(())
}

// Column by column, top to bottom.
fn column_walk(row_width: usize, len: usize) -> impl Iterator<Item = usize> {
    (0..row_width.min(len)).flat_map(move |column| {
        iter::successors(Some(column), move |&index| index.checked_add(row_width))
            .take_while(move |&index| index < len)
    })
}
