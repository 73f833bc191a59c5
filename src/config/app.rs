// src/config/app.rs
use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH, DEFAULT_KEY_LENGTH};
use crate::enums::CipherAlgorithm;
use crate::error::{CoreError, Result};

/// Cipher settings owned by one `DocCrypt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_key_length")]
    pub key_length: usize,
    #[serde(default = "default_iv_length")]
    pub iv_length: usize,
    #[serde(default = "default_scrypt")]
    pub scrypt: ScryptConfig,
}

/// scrypt cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptConfig {
    #[serde(default = "default_log_n")]
    pub log_n: u8,
    #[serde(default = "default_r")]
    pub r: u32,
    #[serde(default = "default_p")]
    pub p: u32,
    #[serde(default = "default_max_memory")]
    pub max_memory: u64,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            key_length: default_key_length(),
            iv_length: default_iv_length(),
            scrypt: default_scrypt(),
        }
    }
}

impl Default for ScryptConfig {
    fn default() -> Self {
        default_scrypt()
    }
}

impl CipherConfig {
    /// Config using the algorithm's native key and IV lengths
    pub fn for_algorithm(algorithm: CipherAlgorithm) -> Self {
        Self {
            algorithm: algorithm.id().to_owned(),
            key_length: algorithm.key_len(),
            iv_length: algorithm.iv_len(),
            scrypt: ScryptConfig::default(),
        }
    }

    /// Resolve the algorithm and check the lengths against it
    pub fn validate(&self) -> Result<CipherAlgorithm> {
        let algorithm: CipherAlgorithm = self.algorithm.parse()?;

        if self.key_length != algorithm.key_len() {
            return Err(CoreError::Configuration(format!(
                "{algorithm} needs a {}-byte key, configured {}",
                algorithm.key_len(),
                self.key_length
            )));
        }
        if self.iv_length != algorithm.iv_len() {
            return Err(CoreError::Configuration(format!(
                "{algorithm} needs a {}-byte IV, configured {}",
                algorithm.iv_len(),
                self.iv_length
            )));
        }

        self.scrypt.to_params()?;
        Ok(algorithm)
    }
}

impl ScryptConfig {
    /// Bytes scrypt will allocate: 128 * r * N.
    /// Saturates at `u128::MAX` for `log_n >= 64`, which no limit admits.
    pub fn memory_cost(&self) -> u128 {
        if self.log_n >= 64 {
            return u128::MAX;
        }
        // 2^7 * 2^32 * 2^63 still fits
        128u128 * u128::from(self.r) * (1u128 << self.log_n)
    }

    pub fn to_params(&self) -> Result<scrypt::Params> {
        // `len` only matters for PHC strings; raw output length is set by the caller
        let params = scrypt::Params::new(self.log_n, self.r, self.p, DEFAULT_KEY_LENGTH)
            .map_err(|e| CoreError::Derivation(e.to_string()))?;

        if self.memory_cost() > u128::from(self.max_memory) {
            return Err(CoreError::Derivation(format!(
                "memory limit exceeded: 128 * r * N = {} > {}",
                self.memory_cost(),
                self.max_memory
            )));
        }

        Ok(params)
    }
}

static CONFIG: OnceLock<CipherConfig> = OnceLock::new();

/// Parse a TOML document; missing fields fall back to defaults
pub fn from_toml_str(content: &str) -> Result<CipherConfig> {
    Ok(toml::from_str(content)?)
}

/// Read a config file without touching the global cache
pub fn load_from(path: impl AsRef<Path>) -> Result<CipherConfig> {
    let content = std::fs::read_to_string(path.as_ref())?;
    from_toml_str(&content)
}

/// Load config once per process (falls back to defaults if the file is missing)
pub fn load() -> Result<&'static CipherConfig> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let conf = if Path::new(&config_path).exists() {
        load_from(&config_path)?
    } else {
        tracing::warn!(path = %config_path, "config file not found, using built-in defaults");
        CipherConfig::default()
    };

    Ok(CONFIG.get_or_init(|| conf))
}
