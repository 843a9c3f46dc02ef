// src/config/defaults.rs
use crate::config::app::{CipherSettings, SmokeSettings};
use crate::consts::DEFAULT_SMOKE_PHRASE;
use crate::enums::IvMode;

pub fn default_cipher() -> CipherSettings {
    CipherSettings {
        iv_mode: IvMode::default(),
    }
}

pub fn default_smoke() -> SmokeSettings {
    SmokeSettings {
        phrase: default_phrase(),
    }
}

pub fn default_phrase() -> String {
    DEFAULT_SMOKE_PHRASE.into()
}
