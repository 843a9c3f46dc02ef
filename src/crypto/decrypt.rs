// src/crypto/decrypt.rs
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use super::Aes256CbcDec;
use crate::aliases::PlainText;
use crate::error::{CoreError, Result};

/// Raw AES-256-CBC ciphertext → plaintext
///
/// Fails with [`CoreError::Decrypt`] when the input is not whole blocks or
/// the PKCS#7 padding does not check out.
pub fn decrypt_cbc(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<PlainText> {
    let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| CoreError::KeyIvLength)?;
    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CoreError::Decrypt)?;
    Ok(PlainText::new(plaintext))
}
