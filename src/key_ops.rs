// src/key_ops.rs
//! Key material generation and representation utilities
//!
//! Key material is 48 random bytes: the first 16 are the CBC IV, the
//! remaining 32 are the AES-256 key. It travels as standard base64.

use std::fmt;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::aliases::{
    KeyMaterial48, PlainText, RandomKeyMaterial48, SecureConversionsExt, SecureRandomExt,
};
use crate::consts::{FINGERPRINT_LEN_HEX, IV_LEN, KEY_MATERIAL_LEN};
use crate::error::{CoreError, Result};
use crate::util::blake3_hex;

/// IV + key pair, zeroized on drop
pub struct KeyMaterial(KeyMaterial48);

impl KeyMaterial {
    /// Draw 48 fresh bytes from the OS random source
    #[inline]
    pub fn generate() -> Self {
        KeyMaterial(KeyMaterial48::new(**RandomKeyMaterial48::new()))
    }

    pub fn from_bytes(bytes: [u8; KEY_MATERIAL_LEN]) -> Self {
        KeyMaterial(KeyMaterial48::new(bytes))
    }

    /// Decode standard base64; the decoded length must be exactly 48 bytes
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let decoded = PlainText::new(STANDARD.decode(encoded.trim())?);
        let bytes: [u8; KEY_MATERIAL_LEN] = decoded
            .expose_secret()
            .as_slice()
            .try_into()
            .map_err(|_| CoreError::InvalidKeyMaterial {
                expected: KEY_MATERIAL_LEN,
                actual: decoded.expose_secret().len(),
            })?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0.expose_secret())
    }

    /// First 16 bytes
    pub fn iv(&self) -> &[u8] {
        &self.0.expose_secret()[..IV_LEN]
    }

    /// Remaining 32 bytes
    pub fn key(&self) -> &[u8] {
        &self.0.expose_secret()[IV_LEN..]
    }

    pub fn to_hex(&self) -> String {
        self.0.expose_secret().to_hex()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.expose_secret()
    }

    /// Non-secret tag for log lines
    pub fn fingerprint(&self) -> String {
        let mut digest = blake3_hex(self.0.expose_secret());
        digest.truncate(FINGERPRINT_LEN_HEX);
        digest
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

/// Multiple string representations of key material for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(material: &KeyMaterial) -> KeyRepr {
    KeyRepr {
        hex: material.to_hex(),
        base64: STANDARD.encode(material.as_bytes()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(material.as_bytes()),
    }
}
