// src/core/cipher.rs
//! Pure cryptographic primitives, no I/O, no encodings
//!
//! Thin dispatch from a [`CipherAlgorithm`] onto the RustCrypto types.
//! CBC output is PKCS#7 padded; GCM output is `ciphertext || tag`.

use aes::{Aes128, Aes192, Aes256};
use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::consts::{AES_BLOCK_LEN, GCM_TAG_LEN};
use crate::enums::CipherAlgorithm;
use crate::error::{CoreError, Result};

/// Encrypt `plaintext` in memory
pub fn encrypt_bytes(
    algorithm: CipherAlgorithm,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    check_lengths(algorithm, key, iv)?;
    match algorithm {
        CipherAlgorithm::Aes128Cbc => cbc_encrypt::<Aes128>(key, iv, plaintext),
        CipherAlgorithm::Aes192Cbc => cbc_encrypt::<Aes192>(key, iv, plaintext),
        CipherAlgorithm::Aes256Cbc => cbc_encrypt::<Aes256>(key, iv, plaintext),
        CipherAlgorithm::Aes128Gcm => gcm_encrypt::<Aes128Gcm>(key, iv, plaintext),
        CipherAlgorithm::Aes256Gcm => gcm_encrypt::<Aes256Gcm>(key, iv, plaintext),
    }
}

/// Decrypt `ciphertext` in memory, stripping padding or verifying the tag
pub fn decrypt_bytes(
    algorithm: CipherAlgorithm,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    check_lengths(algorithm, key, iv)?;

    if algorithm.is_authenticated() {
        if ciphertext.len() < GCM_TAG_LEN {
            return Err(CoreError::Decryption("ciphertext shorter than tag".into()));
        }
    } else if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_LEN != 0 {
        return Err(CoreError::Decryption(format!(
            "ciphertext length {} is not a positive multiple of {AES_BLOCK_LEN}",
            ciphertext.len()
        )));
    }

    match algorithm {
        CipherAlgorithm::Aes128Cbc => cbc_decrypt::<Aes128>(key, iv, ciphertext),
        CipherAlgorithm::Aes192Cbc => cbc_decrypt::<Aes192>(key, iv, ciphertext),
        CipherAlgorithm::Aes256Cbc => cbc_decrypt::<Aes256>(key, iv, ciphertext),
        CipherAlgorithm::Aes128Gcm => gcm_decrypt::<Aes128Gcm>(key, iv, ciphertext),
        CipherAlgorithm::Aes256Gcm => gcm_decrypt::<Aes256Gcm>(key, iv, ciphertext),
    }
}

fn check_lengths(algorithm: CipherAlgorithm, key: &[u8], iv: &[u8]) -> Result<()> {
    if key.len() != algorithm.key_len() {
        return Err(CoreError::Configuration(format!(
            "invalid key length {} for {algorithm}",
            key.len()
        )));
    }
    if iv.len() != algorithm.iv_len() {
        return Err(CoreError::Configuration(format!(
            "invalid IV length {} for {algorithm}",
            iv.len()
        )));
    }
    Ok(())
}

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher,
    cbc::Encryptor<C>: KeyIvInit + BlockEncryptMut,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| CoreError::Configuration(e.to_string()))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher,
    cbc::Decryptor<C>: KeyIvInit + BlockDecryptMut,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| CoreError::Configuration(e.to_string()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CoreError::Decryption("bad padding (wrong key, IV or corrupted data)".into()))
}

fn gcm_encrypt<A>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    A: Aead + KeyInit,
{
    let cipher = A::new_from_slice(key).map_err(|e| CoreError::Configuration(e.to_string()))?;
    cipher
        .encrypt(Nonce::<A>::from_slice(iv), plaintext)
        .map_err(|_| CoreError::Configuration("AEAD encryption rejected input".into()))
}

fn gcm_decrypt<A>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    A: Aead + KeyInit,
{
    let cipher = A::new_from_slice(key).map_err(|e| CoreError::Configuration(e.to_string()))?;
    cipher
        .decrypt(Nonce::<A>::from_slice(iv), ciphertext)
        .map_err(|_| CoreError::Decryption("authentication tag mismatch".into()))
}
