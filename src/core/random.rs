// src/core/random.rs
//! Salt and IV generation

use crate::entropy::EntropySource;
use crate::error::{CoreError, Result};

/// `length` random bytes, hex-encoded
pub fn salt_with(source: &dyn EntropySource, length: usize) -> Result<String> {
    if length == 0 {
        return Err(CoreError::Configuration("salt length must be positive".into()));
    }
    Ok(hex::encode(source.bytes(length)?))
}

/// `length` random bytes for use as an IV or nonce
pub fn iv_with(source: &dyn EntropySource, length: usize) -> Result<Vec<u8>> {
    source.bytes(length)
}
