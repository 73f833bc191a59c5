// src/core/mod.rs
pub mod cipher;
pub mod envelope;
pub mod facade;
pub mod kdf;
pub mod random;

pub use cipher::*;
pub use envelope::*;
pub use facade::*;
pub use kdf::*;
pub use random::*;
