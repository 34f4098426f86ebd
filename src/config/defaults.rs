// src/config/defaults.rs
use crate::config::app::{CipherSettings, Logging};
use crate::consts::DEFAULT_LOG_FILTER;
use crate::enums::CodeUnits;

pub const CONFIG_PATH_ENV: &str = "ARLOT_CONFIG";
pub const CODE_UNITS_ENV: &str = "ARLOT_CODE_UNITS";

pub const LOCAL_CONFIG_FILE: &str = "arlot-protect.toml";
pub const APP_DIR: &str = "arlot-protect";
pub const USER_CONFIG_FILE: &str = "config.toml";

pub fn default_cipher() -> CipherSettings {
    CipherSettings {
        code_units: CodeUnits::Wide,
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
