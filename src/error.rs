// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Random byte generation failed: {0}")]
    Entropy(String),

    #[error("Key derivation failed: {0}")]
    Derivation(String),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Ciphertext is not valid {encoding}: {reason}")]
    Decoding {
        encoding: &'static str,
        reason: String,
    },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Key derivation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
