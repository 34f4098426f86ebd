// src/lib.rs
//! arlot-protect — a password-derived stream cipher
//!
//! Features:
//! - Big-integer key schedule from a password or a secure key
//! - Position-dependent string transform with an exact inverse
//! - Process-wide base encryption that wraps passwords for export
//! - Append-only, wraparound-indexed store of encoded batches
//!
//! Not a cryptographically secure cipher: it reproduces a fixed,
//! deterministic transform and nothing more.

pub mod aliases;
pub mod cipher;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod export;
pub mod key_ops;
#[cfg(feature = "logging")]
pub mod logging;
pub mod store;
pub mod vault;

pub mod error;

// Re-export everything users need at the crate root
pub use cipher::Cipher;
pub use config::load as load_config;
pub use core::{is_valid_key, wrap_index, Ciphertext, KeyMaterial};
pub use enums::CodeUnits;
pub use error::{ProtectError, Result};
pub use export::{export_records_to_json, import_records_from_json};
pub use key_ops::{ciphertext_representations, generate_password, CiphertextRepr};
pub use store::RecordStore;
pub use vault::CredentialVault;
