// src/consts.rs
//! Shared constants: security parameters and defaults

/// Default cipher identifier
pub const DEFAULT_ALGORITHM: &str = "aes-256-cbc";

/// Default key length in bytes (AES-256)
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Default IV length in bytes (one AES block)
pub const DEFAULT_IV_LENGTH: usize = 16;

/// scrypt CPU/memory cost, as log2(N). N = 16384.
pub const SCRYPT_LOG_N: u8 = 14;

/// scrypt block size
pub const SCRYPT_R: u32 = 8;

/// scrypt parallelism
pub const SCRYPT_P: u32 = 1;

/// Upper bound on scrypt memory use (128 * r * N), 32 MiB
pub const SCRYPT_MAX_MEMORY: u64 = 32 * 1024 * 1024;

/// AES block size; CBC IVs are one block
pub const AES_BLOCK_LEN: usize = 16;

/// GCM nonce length accepted by the `aes-gcm` types
pub const GCM_NONCE_LEN: usize = 12;

/// GCM authentication tag, appended to the ciphertext
pub const GCM_TAG_LEN: usize = 16;

/// Default salt length used by the CLI
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Env var naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "DOCCRYPT_CONFIG";

/// Config file used when `DOCCRYPT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "doccrypt.toml";
