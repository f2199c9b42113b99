// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The main library crate for cipher-core, exposing the classical cipher engines and the cipher facade.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher Core Library
//!
//! This library implements a small family of classical text ciphers:
//! Caesar and Vigenère substitution, built on a generalized modular
//! substitution engine, and Rail Fence, Scytale and Columnar transposition.
//!
//! None of these ciphers are secure. They are pure functions over byte
//! slices; the only randomness is Columnar's filler padding, which is drawn
//! from a caller-supplied [`rand::Rng`].
//!
//! ```
//! use cipher_core::{Cipher, Method};
//!
//! let cipher = Cipher::from_key(Method::Caesar, "B")?;
//! let ciphertext = cipher.encrypt(b"HELLOWORLD", &mut rand::rng())?;
//! assert_eq!(ciphertext.text, b"IFMMPXPSME");
//! assert_eq!(cipher.decrypt(&ciphertext.text)?, b"HELLOWORLD");
//! # Ok::<(), cipher_core::CipherError>(())
//! ```

/// Character classes, key inversion and alphabet range helpers.
pub mod alphabet;
/// Caesar cipher.
pub mod caesar;
/// Per-cipher entry points and key parsing.
pub mod cipher;
/// Columnar transposition cipher.
pub mod columnar;
/// Error types.
pub mod error;
/// Rail Fence transposition cipher.
pub mod rail_fence;
/// Scytale transposition cipher.
pub mod scytale;
/// Generalized modular substitution engine.
pub mod substitution;
/// Vigenère cipher.
pub mod vigenere;

pub use alphabet::{Alphabet, UPPER_ALPHA};
pub use cipher::{Cipher, Ciphertext, Direction, Method};
pub use error::{CipherError, Input};

/// Result type for cipher operations.
pub type Result<T> = std::result::Result<T, CipherError>;
