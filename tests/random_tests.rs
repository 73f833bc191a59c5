// tests/random_tests.rs
mod support;

use doccrypt::core::{iv_with, salt_with};
use doccrypt::{CoreError, DocCrypt};
use support::SeededEntropy;

#[test]
fn test_salt_is_hex_of_requested_byte_length() {
    let salt = DocCrypt::salt(16).unwrap();
    assert_eq!(salt.len(), 32);
    assert_eq!(hex::decode(&salt).unwrap().len(), 16);
    assert_ne!(salt, DocCrypt::salt(16).unwrap());
}

#[test]
fn test_zero_length_salt_is_rejected() {
    assert!(matches!(
        DocCrypt::salt(0),
        Err(CoreError::Configuration(_))
    ));
}

#[tokio::test]
async fn test_generate_iv_length_and_freshness() {
    for len in [12, 16, 32] {
        let a = DocCrypt::generate_iv(len).await.unwrap();
        let b = DocCrypt::generate_iv(len).await.unwrap();
        assert_eq!(a.len(), len);
        assert_eq!(b.len(), len);
        assert_ne!(a, b);
    }
}

#[test]
fn test_seeded_source_is_reproducible() {
    let a = SeededEntropy::new(42);
    let b = SeededEntropy::new(42);
    assert_eq!(salt_with(&a, 8).unwrap(), salt_with(&b, 8).unwrap());
    assert_eq!(iv_with(&a, 16).unwrap(), iv_with(&b, 16).unwrap());
}
