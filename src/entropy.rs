// src/entropy.rs
//! Randomness provider seam
//!
//! Salts and IVs are drawn through [`EntropySource`] so callers (and tests)
//! can swap the OS generator for something deterministic.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{CoreError, Result};

/// A source of cryptographically secure random bytes.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` completely or fail.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;

    /// Convenience: `len` fresh bytes.
    fn bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.fill(&mut out)?;
        Ok(out)
    }
}

/// The operating system CSPRNG (`getrandom` under the hood).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CoreError::Entropy(e.to_string()))
    }
}
