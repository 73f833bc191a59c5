// tests/kdf_tests.rs
mod support;

use doccrypt::core::{derive_key, derive_key_blocking};
use doccrypt::{CipherAlgorithm, CipherConfig, CoreError, DocCrypt, ScryptConfig};
use support::cheap_scrypt;

#[tokio::test]
async fn test_derive_key_returns_exactly_requested_length() {
    for len in [1, 16, 24, 32, 64, 100] {
        let key = derive_key("pw", "salt", len, cheap_scrypt()).await.unwrap();
        assert_eq!(key.expose_secret().len(), len);
    }
}

#[tokio::test]
async fn test_default_cost_derive_key_is_deterministic() {
    let a = DocCrypt::derive_key("correct horse", "a1b2c3", 32)
        .await
        .unwrap();
    let b = DocCrypt::derive_key("correct horse", "a1b2c3", 32)
        .await
        .unwrap();
    assert_eq!(a.expose_secret().len(), 32);
    assert_eq!(a.expose_secret(), b.expose_secret());
}

#[tokio::test]
async fn test_different_salt_or_password_changes_key() {
    let base = derive_key("pw", "salt-a", 32, cheap_scrypt()).await.unwrap();
    let other_salt = derive_key("pw", "salt-b", 32, cheap_scrypt()).await.unwrap();
    let other_pw = derive_key("pw2", "salt-a", 32, cheap_scrypt()).await.unwrap();

    assert_ne!(base.expose_secret(), other_salt.expose_secret());
    assert_ne!(base.expose_secret(), other_pw.expose_secret());
}

#[test]
fn test_scrypt_rfc7914_vector() {
    let cost = ScryptConfig {
        log_n: 10,
        r: 8,
        p: 16,
        ..ScryptConfig::default()
    };
    let key = derive_key_blocking(b"password", b"NaCl", 64, &cost).unwrap();
    assert_eq!(
        hex::encode(key.expose_secret()),
        "fdbabe1c9d3472007856e7190d01e9fe7c6ad7cbc8237830e77376634b373162\
         2eaf30d92e22a3886ff109279d9830dac727afb94a83ee6d8360cbdfa2cc0640"
    );
}

#[tokio::test]
async fn test_zero_length_is_derivation_error() {
    let err = derive_key("pw", "salt", 0, cheap_scrypt()).await.unwrap_err();
    assert!(matches!(err, CoreError::Derivation(_)));
}

#[test]
fn test_memory_hungry_parameters_are_rejected() {
    // 128 * 8 * 2^20 = 1 GiB, over the 32 MiB ceiling
    let cost = ScryptConfig {
        log_n: 20,
        ..ScryptConfig::default()
    };
    assert!(cost.memory_cost() > u128::from(cost.max_memory));
    assert!(matches!(
        derive_key_blocking(b"pw", b"salt", 32, &cost),
        Err(CoreError::Derivation(_))
    ));

    let config = CipherConfig {
        scrypt: cost,
        ..CipherConfig::for_algorithm(CipherAlgorithm::Aes256Cbc)
    };
    assert!(matches!(
        DocCrypt::new(config),
        Err(CoreError::Derivation(_))
    ));
}

#[test]
fn test_default_cost_fits_memory_ceiling() {
    let cost = ScryptConfig::default();
    assert_eq!(cost.memory_cost(), 16 * 1024 * 1024);
    assert!(cost.to_params().is_ok());
}

#[test]
fn test_memory_cost_saturates_instead_of_overflowing() {
    for log_n in [63, 64, 118, 127, 200, u8::MAX] {
        let cost = ScryptConfig {
            log_n,
            r: u32::MAX,
            ..ScryptConfig::default()
        };
        assert!(cost.memory_cost() > u128::from(cost.max_memory));
        assert!(matches!(cost.to_params(), Err(CoreError::Derivation(_))));
    }

    let widest = ScryptConfig {
        log_n: 127,
        ..ScryptConfig::default()
    };
    assert_eq!(widest.memory_cost(), u128::MAX);
}
