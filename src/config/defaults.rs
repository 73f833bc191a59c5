// src/config/defaults.rs
use crate::config::app::ScryptConfig;
use crate::consts::{
    DEFAULT_ALGORITHM, DEFAULT_IV_LENGTH, DEFAULT_KEY_LENGTH, SCRYPT_LOG_N, SCRYPT_MAX_MEMORY,
    SCRYPT_P, SCRYPT_R,
};

pub fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.into()
}

pub fn default_key_length() -> usize {
    DEFAULT_KEY_LENGTH
}

pub fn default_iv_length() -> usize {
    DEFAULT_IV_LENGTH
}

pub fn default_log_n() -> u8 {
    SCRYPT_LOG_N
}

pub fn default_r() -> u32 {
    SCRYPT_R
}

pub fn default_p() -> u32 {
    SCRYPT_P
}

pub fn default_max_memory() -> u64 {
    SCRYPT_MAX_MEMORY
}

pub fn default_scrypt() -> ScryptConfig {
    ScryptConfig {
        log_n: default_log_n(),
        r: default_r(),
        p: default_p(),
        max_memory: default_max_memory(),
    }
}
