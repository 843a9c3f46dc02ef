// src/smoke.rs
//! Round-trip smoke test: base64-encode a phrase, encrypt, decrypt, compare

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{info, warn};

use crate::crypto::SymmetricCipher;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokeOutcome {
    Passed,
    Failed,
}

impl fmt::Display for SmokeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmokeOutcome::Passed => f.write_str("Test passed"),
            SmokeOutcome::Failed => f.write_str("Test failed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmokeReport {
    pub passed: bool,
    /// Base64 ciphertext produced during the run
    pub ciphertext: String,
}

impl SmokeReport {
    pub fn outcome(&self) -> SmokeOutcome {
        if self.passed {
            SmokeOutcome::Passed
        } else {
            SmokeOutcome::Failed
        }
    }

    /// Process exit status for this run: 0 on pass, 1 on failure
    pub fn exit_status(&self) -> u8 {
        match self.outcome() {
            SmokeOutcome::Passed => 0,
            SmokeOutcome::Failed => 1,
        }
    }
}

/// Library errors propagate; only the final comparison decides pass/fail.
pub fn run_smoke_test(cipher: &SymmetricCipher, phrase: &str) -> Result<SmokeReport> {
    let encoded = STANDARD.encode(phrase);
    let ciphertext = cipher.encrypt(encoded.as_bytes())?;
    let decrypted = cipher.decrypt(&ciphertext)?;

    let passed = decrypted.expose_secret().as_slice() == encoded.as_bytes();
    if passed {
        info!(fingerprint = %cipher.key_material().fingerprint(), "round trip ok");
    } else {
        warn!(fingerprint = %cipher.key_material().fingerprint(), "round trip mismatch");
    }

    Ok(SmokeReport { passed, ciphertext })
}
