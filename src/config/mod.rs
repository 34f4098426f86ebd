// src/config/mod.rs
//! Configuration system for arlot-protect
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, CipherSettings, Config, Logging};
pub use defaults::{CODE_UNITS_ENV, CONFIG_PATH_ENV};

mod app;
mod defaults;
