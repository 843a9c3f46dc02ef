// src/crypto/encrypt.rs
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};

use super::Aes256CbcEnc;
use crate::error::{CoreError, Result};

/// AES-256-CBC with PKCS#7 padding → raw ciphertext
pub fn encrypt_cbc(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| CoreError::KeyIvLength)?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}
