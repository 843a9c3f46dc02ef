// src/consts.rs
//! Shared constants: cipher geometry and smoke-test defaults

/// AES block size, which is also the CBC IV length
pub const BLOCK_LEN: usize = 16;

/// IV length for AES-256-CBC
pub const IV_LEN: usize = BLOCK_LEN;

/// AES-256 key length
pub const KEY_LEN: usize = 32;

/// Raw key material: IV first, then the key
pub const KEY_MATERIAL_LEN: usize = IV_LEN + KEY_LEN;

/// Hex characters kept from the BLAKE3 digest when fingerprinting key material
pub const FINGERPRINT_LEN_HEX: usize = 16;

/// Phrase the smoke test base64-encodes and round-trips
pub const DEFAULT_SMOKE_PHRASE: &str = "Iamamightytest";

/// Config file read when `ACH_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "aes-cbc-helper.toml";
