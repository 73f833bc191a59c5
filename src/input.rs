// src/input.rs
//! Whole-input text readers for the CLI

use std::io::Read;

use crate::error::Result;

/// Read everything from `reader` as UTF-8, byte-for-byte.
///
/// Trailing newlines are part of the plaintext and are kept.
pub fn read_all(mut reader: impl Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}
