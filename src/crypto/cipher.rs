// src/crypto/cipher.rs
//! Base64-in/base64-out AES-256-CBC helper
//!
//! One instance owns one set of key material for its whole lifetime.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;
use tracing::debug;

use super::{decrypt_cbc, encrypt_cbc};
use crate::aliases::PlainText;
use crate::consts::{BLOCK_LEN, IV_LEN};
use crate::enums::IvMode;
use crate::error::{CoreError, Result};
use crate::key_ops::KeyMaterial;

pub struct SymmetricCipher {
    material: KeyMaterial,
    iv_mode: IvMode,
}

impl SymmetricCipher {
    /// Fresh random key material, static IV
    pub fn new() -> Self {
        Self::with_key_material(KeyMaterial::generate(), IvMode::default())
    }

    /// Fresh random key material with the given IV mode
    pub fn with_iv_mode(iv_mode: IvMode) -> Self {
        Self::with_key_material(KeyMaterial::generate(), iv_mode)
    }

    pub fn with_key_material(material: KeyMaterial, iv_mode: IvMode) -> Self {
        debug!(fingerprint = %material.fingerprint(), %iv_mode, "cipher ready");
        SymmetricCipher { material, iv_mode }
    }

    pub fn key_material(&self) -> &KeyMaterial {
        &self.material
    }

    pub fn iv_mode(&self) -> IvMode {
        self.iv_mode
    }

    /// Encrypt, then base64-encode the result
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String> {
        let wire = match self.iv_mode {
            IvMode::Static => encrypt_cbc(self.material.key(), self.material.iv(), plaintext)?,
            IvMode::PerMessage => {
                let mut iv = [0u8; IV_LEN];
                rand::rng().fill_bytes(&mut iv);
                let mut wire = iv.to_vec();
                wire.extend(encrypt_cbc(self.material.key(), &iv, plaintext)?);
                wire
            }
        };
        debug!(
            plaintext_len = plaintext.len(),
            ciphertext_len = wire.len(),
            "encrypted"
        );
        Ok(STANDARD.encode(wire))
    }

    /// Base64-decode, then decrypt
    pub fn decrypt(&self, encoded: &str) -> Result<PlainText> {
        let wire = STANDARD.decode(encoded.trim())?;
        let plaintext = match self.iv_mode {
            IvMode::Static => decrypt_cbc(self.material.key(), self.material.iv(), &wire)?,
            IvMode::PerMessage => {
                if wire.len() < IV_LEN + BLOCK_LEN {
                    return Err(CoreError::MissingIv(wire.len()));
                }
                let (iv, ciphertext) = wire.split_at(IV_LEN);
                decrypt_cbc(self.material.key(), iv, ciphertext)?
            }
        };
        debug!(
            ciphertext_len = wire.len(),
            plaintext_len = plaintext.expose_secret().len(),
            "decrypted"
        );
        Ok(plaintext)
    }

    pub fn encrypt_str(&self, plaintext: &str) -> Result<String> {
        self.encrypt(plaintext.as_bytes())
    }

    pub fn decrypt_to_string(&self, encoded: &str) -> Result<String> {
        let plaintext = self.decrypt(encoded)?;
        Ok(String::from_utf8(plaintext.expose_secret().clone())?)
    }
}

impl Default for SymmetricCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SymmetricCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricCipher")
            .field("material", &self.material)
            .field("iv_mode", &self.iv_mode)
            .finish()
    }
}
