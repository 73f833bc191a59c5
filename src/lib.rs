// src/lib.rs
//! doccrypt: password-based encryption of text strings
//!
//! Features:
//! - scrypt key derivation on tokio's blocking pool
//! - AES-CBC (PKCS#7) and AES-GCM via RustCrypto
//! - hex / base64 / base64url ciphertext encodings
//! - zeroizing secret wrappers from secure-gate

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod entropy;
pub mod enums;
pub mod error;
pub mod input;

// Re-export everything users need at the crate root
pub use aliases::{DerivedKey, Passphrase};
pub use config::{load as load_config, CipherConfig, ScryptConfig};
pub use self::core::{DecryptionRequest, DocCrypt, EncryptionResult};
pub use entropy::{EntropySource, OsEntropy};
pub use enums::{CipherAlgorithm, Encoding};
pub use error::{CoreError, Result};
