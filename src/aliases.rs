// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout aes-cbc-helper.

pub use secure_gate::{
    dynamic_alias, fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(KeyMaterial48, 48); // 16-byte IV followed by a 256-bit AES key

// Dynamic secrets
dynamic_alias!(PlainText, Vec<u8>);

// Random secrets
random_alias!(RandomKeyMaterial48, 48);
