// src/aliases.rs
//! Secret wrappers from secure-gate
//!
//! Everything that holds key material or a password while it crosses a
//! thread boundary lives in one of these. They zeroize on drop.

pub use secure_gate::dynamic_alias;

// Raw scrypt output, `key_length` bytes
dynamic_alias!(DerivedKey, Vec<u8>);

// Owned copy of a password handed to the blocking KDF pool
dynamic_alias!(Passphrase, String);
