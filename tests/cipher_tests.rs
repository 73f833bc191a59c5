// tests/cipher_tests.rs
use doccrypt::core::{decrypt_bytes, encrypt_bytes};
use doccrypt::{CipherAlgorithm, CoreError};

// NIST SP 800-38A, F.2.5 CBC-AES256.Encrypt, first block
const NIST_KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const NIST_IV: &str = "000102030405060708090a0b0c0d0e0f";
const NIST_PLAIN: &str = "6bc1bee22e409f96e93d7e117393172a";
const NIST_CIPHER: &str = "f58c4c04d6e5f1ba779eabfb5f7bfbd6";

#[test]
fn test_aes256cbc_matches_nist_vector() {
    let key = hex::decode(NIST_KEY).unwrap();
    let iv = hex::decode(NIST_IV).unwrap();
    let plain = hex::decode(NIST_PLAIN).unwrap();

    let out = encrypt_bytes(CipherAlgorithm::Aes256Cbc, &key, &iv, &plain).unwrap();

    // One data block plus one full PKCS#7 padding block
    assert_eq!(out.len(), 32);
    assert_eq!(hex::encode(&out[..16]), NIST_CIPHER);
    assert_eq!(
        decrypt_bytes(CipherAlgorithm::Aes256Cbc, &key, &iv, &out).unwrap(),
        plain
    );
}

#[test]
fn test_gcm_appends_tag() {
    let key = [7u8; 32];
    let nonce = [9u8; 12];
    let out = encrypt_bytes(CipherAlgorithm::Aes256Gcm, &key, &nonce, b"abc").unwrap();
    assert_eq!(out.len(), 3 + 16);

    assert!(matches!(
        decrypt_bytes(CipherAlgorithm::Aes256Gcm, &key, &nonce, &out[..10]),
        Err(CoreError::Decryption(_))
    ));
}

#[test]
fn test_wrong_key_or_iv_length_is_rejected_before_cipher() {
    assert!(matches!(
        encrypt_bytes(CipherAlgorithm::Aes128Cbc, &[0u8; 32], &[0u8; 16], b"x"),
        Err(CoreError::Configuration(_))
    ));
    assert!(matches!(
        decrypt_bytes(CipherAlgorithm::Aes128Gcm, &[0u8; 16], &[0u8; 16], &[0u8; 32]),
        Err(CoreError::Configuration(_))
    ));
}

#[test]
fn test_empty_cbc_ciphertext_is_rejected() {
    assert!(matches!(
        decrypt_bytes(CipherAlgorithm::Aes256Cbc, &[0u8; 32], &[0u8; 16], &[]),
        Err(CoreError::Decryption(_))
    ));
}
