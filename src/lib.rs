// src/lib.rs
//! aes-cbc-helper — AES-256-CBC helper with base64 transport
//!
//! Features:
//! - 48-byte random key material (16-byte IV + 256-bit key)
//! - Static or per-message IVs
//! - Round-trip smoke test
//! - secure-gate wrappers for key material and plaintext

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod file_ops;
pub mod key_ops;
pub mod smoke;
pub mod util;

// Re-export everything users need at the crate root
pub use aliases::{PlainText, SecureConversionsExt, SecureRandomExt};
pub use config::load as load_config;
pub use crypto::SymmetricCipher;
pub use enums::IvMode;
pub use error::{CoreError, Result as CoreResult};
pub use key_ops::{key_representations, KeyMaterial, KeyRepr};
pub use smoke::{run_smoke_test, SmokeOutcome, SmokeReport};
