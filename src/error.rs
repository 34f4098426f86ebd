// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::consts::{PASS_MAX_LENGTH, PASS_MIN_LENGTH};

#[derive(Error, Debug)]
pub enum ProtectError {
    #[error("Invalid characters provided: the key contains characters outside its alphabet")]
    InvalidCharset,

    #[error(
        "Invalid password provided: length {0} is outside [{min}, {max}] characters",
        min = PASS_MIN_LENGTH,
        max = PASS_MAX_LENGTH
    )]
    InvalidPasswordLength(usize),

    #[error("The incorrect password or alias was given to decode")]
    WrongCredential,

    #[error("Configuration is frozen: {0}")]
    FrozenConfiguration(&'static str),

    #[error("This cipher is not secure or doesn't have an alias")]
    NotSecureOrNoAlias,

    #[error("Cannot decode the base encryption via alias")]
    BaseInstanceForbidden,

    #[error("No encrypted data has been saved")]
    EmptyStore,

    #[error("Ciphertext entry {entry} does not decode to valid text")]
    MalformedCiphertext { entry: usize },

    #[error("Exported batch {batch} does not match its fingerprint")]
    FingerprintMismatch { batch: usize },

    #[error("Unknown code unit width: {0}")]
    InvalidCodeUnits(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, ProtectError>;
