// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::enums::CodeUnits;
use crate::error::{ProtectError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cipher: CipherSettings,
    pub logging: Logging,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CipherSettings {
    pub code_units: CodeUnits,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub filter: String,
}

impl Default for CipherSettings {
    fn default() -> Self {
        default_cipher()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}

impl Config {
    /// Parse a config document; missing sections fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `ARLOT_*` environment overrides on top of the file values
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var(CODE_UNITS_ENV) {
            match raw.parse::<CodeUnits>() {
                Ok(units) => self.cipher.code_units = units,
                Err(err) => tracing::warn!("ignoring {CODE_UNITS_ENV}: {err}"),
            }
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut conf = match config_path() {
            Some(path) => match std::fs::read_to_string(&path)
                .map_err(ProtectError::from)
                .and_then(|content| Config::from_toml_str(&content))
            {
                Ok(conf) => {
                    tracing::debug!("loaded config from {}", path.display());
                    conf
                }
                Err(err) => {
                    tracing::warn!("{} unusable ({err}) — using built-in defaults", path.display());
                    Config::default()
                }
            },
            None => {
                tracing::debug!("no config file found — using built-in defaults");
                Config::default()
            }
        };

        conf.apply_env_overrides();
        conf
    })
}

/// First existing candidate: `ARLOT_CONFIG`, the working directory, then the user config dir
fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(explicit));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
