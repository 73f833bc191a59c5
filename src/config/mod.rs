// src/config/mod.rs
//! Configuration system for doccrypt
//!
//! Explicit, validated-at-construction cipher settings with TOML loading and
//! a lazy process-wide cache.

pub use app::{from_toml_str, load, load_from, CipherConfig, ScryptConfig};

mod app;
mod defaults;
