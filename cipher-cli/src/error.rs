use std::path::PathBuf;

use cipher_core::{CipherError, Method};
use thiserror::Error;

/// Everything that can make a CLI invocation fail.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse metadata file '{}': {source}", .path.display())]
    ParseMetadata {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize metadata: {0}")]
    SerializeMetadata(#[source] serde_json::Error),

    #[error("metadata was written for {recorded}, but {requested} was requested")]
    MethodMismatch { recorded: Method, requested: Method },

    #[error(
        "ciphertext hash does not match metadata hash. The file may be corrupt or tampered with."
    )]
    HashMismatch,
}
