// src/core/facade.rs
//! `DocCrypt`: password-based string encryption
//!
//! Each call derives a fresh key with scrypt, draws a fresh IV, and runs one
//! cipher pass. The facade only holds immutable configuration, so a single
//! instance can be cloned or shared across tasks freely.
//!
//! Nothing about the algorithm or lengths is written into an
//! [`EncryptionResult`]; decrypt with a facade configured the same way as
//! the one that encrypted.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::aliases::DerivedKey;
use crate::config::{CipherConfig, ScryptConfig};
use crate::core::cipher::{decrypt_bytes, encrypt_bytes};
use crate::core::envelope::{DecryptionRequest, EncryptionResult};
use crate::core::kdf;
use crate::core::random::{iv_with, salt_with};
use crate::enums::{CipherAlgorithm, Encoding};
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::{CoreError, Result};

#[derive(Clone)]
pub struct DocCrypt {
    config: CipherConfig,
    algorithm: CipherAlgorithm,
    entropy: Arc<dyn EntropySource>,
}

impl DocCrypt {
    /// Build a facade from an explicit config, rejecting unknown ciphers,
    /// key/IV lengths the cipher cannot use, and bad scrypt parameters.
    pub fn new(config: CipherConfig) -> Result<Self> {
        let algorithm = config.validate()?;
        Ok(Self {
            config,
            algorithm,
            entropy: Arc::new(OsEntropy),
        })
    }

    /// AES-256-CBC, 32-byte key, 16-byte IV
    pub fn aes256cbc() -> Self {
        Self::for_algorithm(CipherAlgorithm::Aes256Cbc)
    }

    /// Any supported cipher at its native key and IV lengths
    pub fn for_algorithm(algorithm: CipherAlgorithm) -> Self {
        Self {
            config: CipherConfig::for_algorithm(algorithm),
            algorithm,
            entropy: Arc::new(OsEntropy),
        }
    }

    /// Swap the randomness source used for IVs and instance salts
    pub fn with_entropy(mut self, entropy: Arc<dyn EntropySource>) -> Self {
        self.entropy = entropy;
        self
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    pub fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    /// Identifiers of every cipher this crate can drive
    pub fn list_ciphers() -> Vec<&'static str> {
        CipherAlgorithm::ALL.iter().map(|algo| algo.id()).collect()
    }

    /// `length` OS-random bytes, hex-encoded
    pub fn salt(length: usize) -> Result<String> {
        salt_with(&OsEntropy, length)
    }

    /// scrypt with default cost parameters, run on the blocking pool
    pub async fn derive_key(password: &str, salt: &str, key_length: usize) -> Result<DerivedKey> {
        kdf::derive_key(password, salt, key_length, ScryptConfig::default()).await
    }

    /// `iv_length` OS-random bytes
    pub async fn generate_iv(iv_length: usize) -> Result<Vec<u8>> {
        iv_with(&OsEntropy, iv_length)
    }

    /// Salt drawn from this instance's entropy source
    pub fn new_salt(&self, length: usize) -> Result<String> {
        salt_with(self.entropy.as_ref(), length)
    }

    /// Derive a key of the configured length with the configured scrypt cost
    pub async fn derive(&self, password: &str, salt: &str) -> Result<DerivedKey> {
        kdf::derive_key(password, salt, self.config.key_length, self.config.scrypt).await
    }

    /// A fresh IV of the configured length
    pub async fn iv(&self) -> Result<Vec<u8>> {
        iv_with(self.entropy.as_ref(), self.config.iv_length)
    }

    pub async fn encrypt_string(
        &self,
        password: &str,
        salt: &str,
        plaintext: &str,
        encoding: Encoding,
    ) -> Result<EncryptionResult> {
        debug!(
            algorithm = %self.algorithm,
            %encoding,
            plaintext_len = plaintext.len(),
            "encrypting string"
        );

        let (key, iv) = tokio::try_join!(self.derive(password, salt), self.iv())?;
        let ciphertext = encrypt_bytes(
            self.algorithm,
            key.expose_secret(),
            &iv,
            plaintext.as_bytes(),
        )?;

        Ok(EncryptionResult {
            ciphertext: encoding.encode(&ciphertext),
            iv,
            encoding,
        })
    }

    /// `encrypt_string` with hex output
    pub async fn encrypt_string_hex(
        &self,
        password: &str,
        salt: &str,
        plaintext: &str,
    ) -> Result<EncryptionResult> {
        self.encrypt_string(password, salt, plaintext, Encoding::Hex)
            .await
    }

    pub async fn decrypt_string(&self, request: DecryptionRequest) -> Result<String> {
        debug!(
            algorithm = %self.algorithm,
            encoding = %request.encoding,
            key_supplied = request.key.is_some(),
            "decrypting string"
        );

        // Cheap checks first; scrypt only runs for well-formed input
        let ciphertext = request.encoding.decode(&request.ciphertext)?;
        if request.iv.len() != self.config.iv_length {
            return Err(CoreError::Configuration(format!(
                "invalid IV length {} for {}, expected {}",
                request.iv.len(),
                self.algorithm,
                self.config.iv_length
            )));
        }

        let key = match request.key {
            Some(key) => DerivedKey::new(key),
            None => match (request.password.as_deref(), request.salt.as_deref()) {
                (Some(password), Some(salt)) => self.derive(password, salt).await?,
                _ => {
                    return Err(CoreError::Configuration(
                        "decryption needs a key, or a password and salt".into(),
                    ))
                }
            },
        };

        let plaintext = decrypt_bytes(self.algorithm, key.expose_secret(), &request.iv, &ciphertext)
            .inspect_err(|e| warn!(algorithm = %self.algorithm, error = %e, "decryption failed"))?;

        String::from_utf8(plaintext)
            .map_err(|_| CoreError::Decryption("recovered plaintext is not valid UTF-8".into()))
    }
}

impl Default for DocCrypt {
    fn default() -> Self {
        Self::aes256cbc()
    }
}

impl fmt::Debug for DocCrypt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocCrypt")
            .field("algorithm", &self.algorithm)
            .field("key_length", &self.config.key_length)
            .field("iv_length", &self.config.iv_length)
            .field("scrypt", &self.config.scrypt)
            .finish_non_exhaustive()
    }
}
