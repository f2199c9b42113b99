// File:    rail_fence.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The Rail Fence transposition cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Rail Fence cipher limited to upper-case letters (`A-Z`).
//!
//! The plaintext is written in a zig-zag across `num_rails` rows and read
//! back row by row:
//!
//! ```text
//! W . . . E . . . C . . . R . . . L . . . T . . . E
//! . E . R . D . S . O . E . E . F . E . A . O . C .
//! . . A . . . I . . . V . . . D . . . E . . . N . .
//! ```
//!
//! See <https://en.wikipedia.org/wiki/Rail_fence_cipher>.

use log::debug;

use crate::Result;
use crate::alphabet::UPPER_ALPHA;
use crate::error::{CipherError, Input};

/// Encrypts `plaintext` across `num_rails` rails.
///
/// One rail is the identity.
///
/// # Errors
///
/// Returns [`CipherError::NonAlphaCharacter`] if the plaintext holds anything
/// other than `A-Z`, and [`CipherError::InvalidKey`] if `num_rails` is zero.
pub fn encrypt(num_rails: usize, plaintext: &[u8]) -> Result<Vec<u8>> {
    UPPER_ALPHA.check(plaintext, Input::Plaintext)?;
    check_rails(num_rails)?;
    if num_rails == 1 {
        return Ok(plaintext.to_vec());
    }
    debug!("rail fence encrypt: {num_rails} rails, {} symbol(s)", plaintext.len());
    Ok(RailWalk::new(num_rails, plaintext.len())
        .map(|index| plaintext[index])
        .collect())
}

/// Decrypts `ciphertext` that was encrypted across `num_rails` rails.
///
/// # Errors
///
/// Returns [`CipherError::NonAlphaCharacter`] if the ciphertext holds anything
/// other than `A-Z`, and [`CipherError::InvalidKey`] if `num_rails` is zero.
pub fn decrypt(num_rails: usize, ciphertext: &[u8]) -> Result<Vec<u8>> {
    UPPER_ALPHA.check(ciphertext, Input::Ciphertext)?;
    check_rails(num_rails)?;
    if num_rails == 1 {
        return Ok(ciphertext.to_vec());
    }
    debug!("rail fence decrypt: {num_rails} rails, {} symbol(s)", ciphertext.len());
    let mut plaintext = vec![0u8; ciphertext.len()];
    for (&symbol, index) in ciphertext.iter().zip(RailWalk::new(num_rails, ciphertext.len())) {
        plaintext[index] = symbol;
    }
    Ok(plaintext)
}

fn check_rails(num_rails: usize) -> Result<()> {
    if num_rails == 0 {
        return Err(CipherError::invalid_key("number of rails must be > 0"));
    }
    Ok(())
}

/// Plaintext positions in the order the rails read them.
///
/// Rail `r` starts at position `r` and alternates between two gaps:
/// `gap1 = 2 * (rails - r - 1)` and `gap2 = 2 * (rails - 1) - gap1`. On the
/// first and last rail one of the gaps is zero; that step lands on the
/// position just visited and is not yielded again.
///
/// Every position in `[0, len)` is yielded exactly once. Requires at least
/// two rails.
#[derive(Debug, Clone)]
pub(crate) struct RailWalk {
    len: usize,
    num_rails: usize,
    rail: usize,
    index: usize,
    gap: usize,
    use_first_gap: bool,
}

impl RailWalk {
    /// Starts a walk over `len` positions with `num_rails` rails.
    ///
    /// # Panics
    ///
    /// Panics if `num_rails < 2`, since a single rail never advances.
    #[must_use]
    pub(crate) fn new(num_rails: usize, len: usize) -> Self {
        assert!(num_rails >= 2, "a rail walk needs at least two rails");
        Self {
            len,
            num_rails,
            rail: 0,
            index: 0,
            gap: 1,
            use_first_gap: true,
        }
    }

    const fn gaps(&self) -> (usize, usize) {
        let gap1 = (self.num_rails - self.rail - 1).saturating_mul(2);
        let gap2 = (self.num_rails - 1).saturating_mul(2) - gap1;
        (gap1, gap2)
    }
}

impl Iterator for RailWalk {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            // Rails that start past the end of the text hold nothing.
            if self.rail >= self.num_rails || self.rail >= self.len {
                return None;
            }
            if self.index >= self.len {
                self.rail += 1;
                self.index = self.rail;
                self.gap = 1;
                self.use_first_gap = true;
                continue;
            }

            let current = self.index;
            let emit = self.gap > 0;
            let (gap1, gap2) = self.gaps();
            self.gap = if self.use_first_gap { gap1 } else { gap2 };
            self.use_first_gap = !self.use_first_gap;
            self.index = self.index.saturating_add(self.gap);
            if emit {
                return Some(current);
            }
        }
    }
}
