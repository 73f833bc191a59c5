// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Cipher identifiers and ciphertext text encodings. Both round-trip through
//! their lowercase string names, which is also how they appear on the wire.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::consts::{AES_BLOCK_LEN, GCM_NONCE_LEN};
use crate::error::{CoreError, Result};

/// Supported cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum CipherAlgorithm {
    #[serde(rename = "aes-128-cbc")]
    Aes128Cbc,
    #[serde(rename = "aes-192-cbc")]
    Aes192Cbc,
    #[default]
    #[serde(rename = "aes-256-cbc")]
    Aes256Cbc,
    #[serde(rename = "aes-128-gcm")]
    Aes128Gcm,
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm,
}

impl CipherAlgorithm {
    pub const ALL: [CipherAlgorithm; 5] = [
        CipherAlgorithm::Aes128Cbc,
        CipherAlgorithm::Aes192Cbc,
        CipherAlgorithm::Aes256Cbc,
        CipherAlgorithm::Aes128Gcm,
        CipherAlgorithm::Aes256Gcm,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CipherAlgorithm::Aes128Cbc => "aes-128-cbc",
            CipherAlgorithm::Aes192Cbc => "aes-192-cbc",
            CipherAlgorithm::Aes256Cbc => "aes-256-cbc",
            CipherAlgorithm::Aes128Gcm => "aes-128-gcm",
            CipherAlgorithm::Aes256Gcm => "aes-256-gcm",
        }
    }

    /// Native key length in bytes
    pub fn key_len(self) -> usize {
        match self {
            CipherAlgorithm::Aes128Cbc | CipherAlgorithm::Aes128Gcm => 16,
            CipherAlgorithm::Aes192Cbc => 24,
            CipherAlgorithm::Aes256Cbc | CipherAlgorithm::Aes256Gcm => 32,
        }
    }

    /// Native IV (nonce) length in bytes
    pub fn iv_len(self) -> usize {
        if self.is_authenticated() {
            GCM_NONCE_LEN
        } else {
            AES_BLOCK_LEN
        }
    }

    /// GCM modes carry a tag; CBC modes only have padding to check
    pub fn is_authenticated(self) -> bool {
        matches!(
            self,
            CipherAlgorithm::Aes128Gcm | CipherAlgorithm::Aes256Gcm
        )
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        CipherAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.id() == wanted)
            .ok_or_else(|| CoreError::Configuration(format!("unsupported cipher: {s}")))
    }
}

/// Text encodings for ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Lowercase hexadecimal
    #[default]
    Hex,
    /// Standard alphabet, padded
    Base64,
    /// URL-safe alphabet, unpadded
    Base64Url,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
        }
    }

    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => hex::encode(bytes),
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Base64Url => URL_SAFE_NO_PAD.encode(bytes),
        }
    }

    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        let decoded = match self {
            Encoding::Hex => hex::decode(text).map_err(|e| e.to_string()),
            Encoding::Base64 => STANDARD.decode(text).map_err(|e| e.to_string()),
            Encoding::Base64Url => URL_SAFE_NO_PAD.decode(text).map_err(|e| e.to_string()),
        };
        decoded.map_err(|reason| CoreError::Decoding {
            encoding: self.name(),
            reason,
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            "base64url" => Ok(Encoding::Base64Url),
            _ => Err(CoreError::UnknownEncoding(s.to_owned())),
        }
    }
}
