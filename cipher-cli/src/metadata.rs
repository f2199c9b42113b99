use std::fs;
use std::path::Path;

use cipher_core::{Ciphertext, Method};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Metadata stored alongside the ciphertext to enable correct decryption.
///
/// Columnar ciphertext carries random padding that cannot be told apart
/// from the message, so the padding count is kept here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct CiphertextMetadata {
    pub(crate) method: Method,
    /// Plaintext length before padding.
    pub(crate) length: usize,
    pub(crate) padding: usize,
    pub(crate) ciphertext_hash: String,
}

impl CiphertextMetadata {
    pub(crate) fn new(method: Method, length: usize, ciphertext: &Ciphertext) -> Self {
        Self {
            method,
            length,
            padding: ciphertext.padding,
            ciphertext_hash: hash_hex(&ciphertext.text),
        }
    }

    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let metadata_str = fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&metadata_str).map_err(|source| AppError::ParseMetadata {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn save(&self, path: &Path) -> Result<(), AppError> {
        let metadata_str =
            serde_json::to_string_pretty(self).map_err(AppError::SerializeMetadata)?;
        fs::write(path, metadata_str).map_err(|source| AppError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that this metadata belongs to `ciphertext` encrypted with `method`.
    pub(crate) fn verify(&self, method: Method, ciphertext: &[u8]) -> Result<(), AppError> {
        if self.method != method {
            return Err(AppError::MethodMismatch {
                recorded: self.method,
                requested: method,
            });
        }
        if hash_hex(ciphertext) != self.ciphertext_hash {
            return Err(AppError::HashMismatch);
        }
        Ok(())
    }
}

fn hash_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CiphertextMetadata {
        let ciphertext = Ciphertext {
            text: b"EVLNEACDTKESEAQROFOJDEECUWIREE".to_vec(),
            padding: 5,
        };
        CiphertextMetadata::new(Method::Columnar, 25, &ciphertext)
    }

    #[test]
    fn verify_accepts_matching_ciphertext() {
        let meta = sample();
        assert!(meta.verify(Method::Columnar, b"EVLNEACDTKESEAQROFOJDEECUWIREE").is_ok());
    }

    #[test]
    fn verify_rejects_tampering_and_wrong_method() {
        let meta = sample();
        assert!(matches!(
            meta.verify(Method::Columnar, b"EVLNEACDTKESEAQROFOJDEECUWIREF"),
            Err(AppError::HashMismatch)
        ));
        assert!(matches!(
            meta.verify(Method::Scytale, b"EVLNEACDTKESEAQROFOJDEECUWIREE"),
            Err(AppError::MethodMismatch { .. })
        ));
    }

    #[test]
    fn metadata_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["method"], "columnar");
        assert_eq!(json["length"], 25);
        assert_eq!(json["padding"], 5);
        assert_eq!(json["ciphertext_hash"].as_str().map(str::len), Some(64));
    }
}
