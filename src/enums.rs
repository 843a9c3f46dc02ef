// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the cipher picks the IV for each message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IvMode {
    /// Reuse the IV sliced from the key material for every message
    #[default]
    Static,
    /// Fresh random IV per message, prepended to the ciphertext
    PerMessage,
}

impl fmt::Display for IvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IvMode::Static => f.write_str("static"),
            IvMode::PerMessage => f.write_str("per_message"),
        }
    }
}

impl FromStr for IvMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(IvMode::Static),
            "per_message" => Ok(IvMode::PerMessage),
            other => Err(format!("unknown IV mode `{other}`")),
        }
    }
}
