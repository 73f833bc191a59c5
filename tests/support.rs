// tests/support.rs
//! Deterministic entropy and cheap-scrypt facades for tests

use std::sync::{Arc, Mutex};

use doccrypt::{
    CipherAlgorithm, CipherConfig, CoreError, DocCrypt, EntropySource, Result, ScryptConfig,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Seeded, reproducible byte stream
pub struct SeededEntropy(Mutex<StdRng>);

impl SeededEntropy {
    #[allow(dead_code)]
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl EntropySource for SeededEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        self.0.lock().unwrap().fill_bytes(dest);
        Ok(())
    }
}

/// Always reports an exhausted random source
#[allow(dead_code)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill(&self, _dest: &mut [u8]) -> Result<()> {
        Err(CoreError::Entropy("random source unavailable".into()))
    }
}

/// scrypt at N = 16 so the suites stay fast
#[allow(dead_code)]
pub fn cheap_scrypt() -> ScryptConfig {
    ScryptConfig {
        log_n: 4,
        ..ScryptConfig::default()
    }
}

#[allow(dead_code)]
pub fn cheap_config(algorithm: CipherAlgorithm) -> CipherConfig {
    CipherConfig {
        scrypt: cheap_scrypt(),
        ..CipherConfig::for_algorithm(algorithm)
    }
}

#[allow(dead_code)]
pub fn cheap(algorithm: CipherAlgorithm) -> DocCrypt {
    DocCrypt::new(cheap_config(algorithm)).expect("cheap config is valid")
}

#[allow(dead_code)]
pub fn seeded(algorithm: CipherAlgorithm, seed: u64) -> DocCrypt {
    cheap(algorithm).with_entropy(Arc::new(SeededEntropy::new(seed)))
}
