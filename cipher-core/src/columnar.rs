// File:    columnar.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The Columnar transposition cipher, with explicit padding and decryption.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Columnar transposition cipher.
//!
//! Like the scytale, the plaintext is wrapped into rows, but the columns are
//! read in the order given by sorting the key's letters rather than left to
//! right. The key length is the number of columns.
//!
//! ```text
//! key:        ZEBRAS
//! plaintext:  WEAREDISCOVEREDFLEEATONCEQKJEU
//!
//!     6 3 2 4 1 5         1. EVLNE
//!     W E A R E D         2. ACDTK
//!     I S C O V E         3. ESEAQ
//!     R E D F L E         4. ROFOJ
//!     E A T O N C         5. DEECU
//!     E Q K J E U         6. WIREE
//!
//! ciphertext: EVLNEACDTKESEAQROFOJDEECUWIREE
//! ```
//!
//! Plaintext that does not fill the last row is padded with random letters
//! from a caller-supplied [`Rng`]. The padding count travels with the
//! ciphertext in [`Ciphertext::padding`]; it cannot be recovered from the
//! ciphertext alone.

use log::debug;
use rand::Rng;

use crate::Result;
use crate::cipher::Ciphertext;
use crate::error::CipherError;

/// Encrypts `plaintext` with the columnar `key`, padding with letters drawn from `rng`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty.
pub fn encrypt<R: Rng + ?Sized>(key: &[u8], plaintext: &[u8], rng: &mut R) -> Result<Ciphertext> {
    let num_columns = check_key(key)?;

    let mut padded = plaintext.to_vec();
    let padding = padding_for(plaintext.len(), num_columns);
    padded.extend((0..padding).map(|_| rng.random_range(b'A'..=b'Z')));

    let order = column_order(key);
    debug!(
        "columnar encrypt: {num_columns} column(s), order {order:?}, {padding} padding symbol(s)"
    );
    let text = column_walk(&order, padded.len())
        .map(|index| padded[index])
        .collect();
    Ok(Ciphertext { text, padding })
}

/// Decrypts `ciphertext` with the columnar `key`.
///
/// The result still carries any padding added during encryption; see
/// [`Ciphertext::strip_padding`].
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty, and
/// [`CipherError::InvalidLength`] if the ciphertext length is not a multiple
/// of the key length.
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let num_columns = check_key(key)?;
    if ciphertext.len() % num_columns != 0 {
        return Err(CipherError::InvalidLength {
            length: ciphertext.len(),
            columns: num_columns,
        });
    }

    let order = column_order(key);
    debug!("columnar decrypt: {num_columns} column(s), order {order:?}");
    let mut plaintext = vec![0u8; ciphertext.len()];
    for (&symbol, index) in ciphertext.iter().zip(column_walk(&order, ciphertext.len())) {
        plaintext[index] = symbol;
    }
    Ok(plaintext)
}

/// Column indices sorted by the key letter heading each column.
///
/// Repeated letters keep their left-to-right order.
#[must_use]
pub fn column_order(key: &[u8]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..key.len()).collect();
    // Vec::sort_by_key is stable.
    order.sort_by_key(|&index| key[index]);
    order
}

/// Number of filler symbols needed to bring `len` up to a multiple of `num_columns`.
#[must_use]
pub const fn padding_for(len: usize, num_columns: usize) -> usize {
    if num_columns == 0 {
        return 0;
    }
    match len % num_columns {
        0 => 0,
        rem => num_columns - rem,
    }
}

fn check_key(key: &[u8]) -> Result<usize> {
    if key.is_empty() {
        return Err(CipherError::invalid_key("columnar key must not be empty"));
    }
    Ok(key.len())
}

fn column_walk(order: &[usize], len: usize) -> impl Iterator<Item = usize> + '_ {
    let num_columns = order.len();
    order
        .iter()
        .flat_map(move |&column| (column..len).step_by(num_columns))
}
