// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Key material must be {expected} bytes, got {actual}")]
    InvalidKeyMaterial { expected: usize, actual: usize },

    #[error("Invalid key or IV length")]
    KeyIvLength,

    #[error("Decryption failed: ciphertext length or padding is invalid")]
    Decrypt,

    #[error("Ciphertext too short to carry an IV: {0} bytes")]
    MissingIv(usize),

    #[error("Plaintext is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
