// src/crypto/mod.rs
//! Cryptographic operations, no file I/O
//!
//! `decrypt`/`encrypt` are the raw AES-256-CBC primitives over byte
//! buffers; `cipher` is the base64-in/base64-out helper built on them.
mod cipher;
mod decrypt;
mod encrypt;

pub use cipher::SymmetricCipher;
pub use decrypt::decrypt_cbc;
pub use encrypt::encrypt_cbc;

pub(crate) type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
pub(crate) type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
