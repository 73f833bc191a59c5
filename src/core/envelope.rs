// src/core/envelope.rs
//! The data shapes handed to and returned by the facade
//!
//! `EncryptionResult` is the persisted contract:
//! `{"ciphertext": "...", "iv": [..], "encoding": "hex"}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Encoding;

/// Output of one `encrypt_string` call. Store it intact: without the IV
/// and encoding the ciphertext cannot be decrypted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionResult {
    pub ciphertext: String,
    pub iv: Vec<u8>,
    pub encoding: Encoding,
}

/// Input to `decrypt_string`. Either `key` or both `password` and `salt`
/// must be present.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct DecryptionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Vec<u8>>,
    pub iv: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(default)]
    pub encoding: Encoding,
    pub ciphertext: String,
}

impl DecryptionRequest {
    /// Decrypt a stored result by re-deriving the key
    pub fn with_password(
        result: EncryptionResult,
        password: impl Into<String>,
        salt: impl Into<String>,
    ) -> Self {
        Self {
            key: None,
            iv: result.iv,
            password: Some(password.into()),
            salt: Some(salt.into()),
            encoding: result.encoding,
            ciphertext: result.ciphertext,
        }
    }

    /// Decrypt a stored result with an already-derived key
    pub fn with_key(result: EncryptionResult, key: Vec<u8>) -> Self {
        Self {
            key: Some(key),
            iv: result.iv,
            password: None,
            salt: None,
            encoding: result.encoding,
            ciphertext: result.ciphertext,
        }
    }
}

impl fmt::Debug for DecryptionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptionRequest")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("iv", &self.iv)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("salt", &self.salt)
            .field("encoding", &self.encoding)
            .field("ciphertext", &self.ciphertext)
            .finish()
    }
}
