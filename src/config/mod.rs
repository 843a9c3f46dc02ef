// src/config/mod.rs
//! Configuration system for aes-cbc-helper
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, CipherSettings, Config, SmokeSettings};

mod app;
mod defaults;
