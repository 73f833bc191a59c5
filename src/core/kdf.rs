// src/core/kdf.rs
//! Password-based key derivation (scrypt)
//!
//! scrypt is deliberately slow, so the async entry point hands the work to
//! tokio's blocking pool and never runs it on an executor thread.

use tracing::debug;

use crate::aliases::{DerivedKey, Passphrase};
use crate::config::ScryptConfig;
use crate::error::{CoreError, Result};

/// Run scrypt on the current thread, producing exactly `key_length` bytes.
///
/// `password` and `salt` are taken as raw bytes; a hex salt string is *not*
/// decoded first.
pub fn derive_key_blocking(
    password: &[u8],
    salt: &[u8],
    key_length: usize,
    cost: &ScryptConfig,
) -> Result<DerivedKey> {
    if key_length == 0 {
        return Err(CoreError::Derivation("key length must be positive".into()));
    }

    let params = cost.to_params()?;
    let mut out = vec![0u8; key_length];
    scrypt::scrypt(password, salt, &params, &mut out)
        .map_err(|e| CoreError::Derivation(e.to_string()))?;
    Ok(DerivedKey::new(out))
}

/// Async scrypt on the blocking pool. Requires a tokio runtime.
pub async fn derive_key(
    password: &str,
    salt: &str,
    key_length: usize,
    cost: ScryptConfig,
) -> Result<DerivedKey> {
    let password = Passphrase::new(password.to_owned());
    let salt = salt.to_owned();

    debug!(key_length, log_n = cost.log_n, "deriving key");
    tokio::task::spawn_blocking(move || {
        derive_key_blocking(
            password.expose_secret().as_bytes(),
            salt.as_bytes(),
            key_length,
            &cost,
        )
    })
    .await?
}
