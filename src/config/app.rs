// src/config/app.rs
use super::defaults::*;
use crate::consts::DEFAULT_CONFIG_PATH;
use crate::enums::IvMode;
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_cipher")]
    pub cipher: CipherSettings,
    #[serde(default = "default_smoke")]
    pub smoke: SmokeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CipherSettings {
    #[serde(default)]
    pub iv_mode: IvMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmokeSettings {
    #[serde(default = "default_phrase")]
    pub phrase: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cipher: default_cipher(),
            smoke: default_smoke(),
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse a config file. A missing file yields the built-in defaults.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Global config, loaded once. Falls back to defaults when the file is unusable.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("ACH_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut conf = or_defaults(&config_path, load_from(&config_path));
        apply_iv_mode_override(&mut conf, std::env::var("ACH_IV_MODE").ok().as_deref());
        conf
    })
}

fn or_defaults(config_path: &str, loaded: Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        warn!(path = %config_path, error = %err, "unusable config, using built-in defaults");
        Config::default()
    })
}

/// `ACH_IV_MODE` wins over the file; an unparseable value is ignored
fn apply_iv_mode_override(conf: &mut Config, raw: Option<&str>) {
    if let Some(raw) = raw {
        match raw.parse::<IvMode>() {
            Ok(mode) => conf.cipher.iv_mode = mode,
            Err(err) => warn!(error = %err, "ignoring ACH_IV_MODE"),
        }
    }
}
