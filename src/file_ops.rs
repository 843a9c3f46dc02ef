// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! Builds on [`SymmetricCipher`]: encrypted files hold the base64 text the
//! cipher produces, so they stay safe to paste or mail around.

use std::path::Path;

use crate::aliases::PlainText;
use crate::crypto::SymmetricCipher;
use crate::error::Result;

/// Encrypt a file on disk
///
/// Reads the plaintext file, encrypts it in-memory, writes base64 ciphertext.
/// Returns the plaintext size in bytes.
pub fn encrypt_file<P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    cipher: &SymmetricCipher,
) -> Result<u64> {
    let plaintext = PlainText::new(std::fs::read(input_path.as_ref())?);
    let encoded = cipher.encrypt(plaintext.expose_secret())?;
    std::fs::write(output_path.as_ref(), encoded)?;

    let plaintext_size_bytes = plaintext.expose_secret().len() as u64;
    Ok(plaintext_size_bytes)
}

/// Decrypt a base64 ciphertext file on disk
///
/// Surrounding whitespace (a trailing newline from an editor) is ignored.
/// Returns the plaintext size in bytes.
pub fn decrypt_file<P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    cipher: &SymmetricCipher,
) -> Result<u64> {
    let encoded = std::fs::read_to_string(input_path.as_ref())?;
    let plaintext = cipher.decrypt(&encoded)?;
    std::fs::write(output_path.as_ref(), plaintext.expose_secret())?;

    let plaintext_size_bytes = plaintext.expose_secret().len() as u64;
    Ok(plaintext_size_bytes)
}
