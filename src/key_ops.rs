// src/key_ops.rs
//! Password generation and ciphertext representation utilities
//!
//! This module handles random password generation and
//! multiple representations (hex, base64, etc.) for ciphertexts.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::Rng;

use crate::consts::{BASE_ALPHABET, PASS_MAX_LENGTH, PASS_MIN_LENGTH};
use crate::core::stream::Ciphertext;
use crate::error::{ProtectError, Result};

/// Generate a random password of `len` characters from the base alphabet
pub fn generate_password(len: usize) -> Result<String> {
    if !(PASS_MIN_LENGTH..=PASS_MAX_LENGTH).contains(&len) {
        return Err(ProtectError::InvalidPasswordLength(len));
    }
    let mut rng = rand::rng();
    Ok((0..len)
        .map(|_| BASE_ALPHABET[rng.random_range(0..BASE_ALPHABET.len())])
        .collect())
}

/// Multiple string representations of a ciphertext for export/display
#[derive(Debug, Clone)]
pub struct CiphertextRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn ciphertext_representations(ciphertext: &Ciphertext) -> CiphertextRepr {
    let bytes = ciphertext.to_bytes();
    CiphertextRepr {
        hex: hex::encode(&bytes),
        base64: STANDARD.encode(&bytes),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(&bytes),
    }
}

/// Parse the base64url form produced by [`ciphertext_representations`]
pub fn ciphertext_from_base64url(encoded: &str) -> Option<Ciphertext> {
    URL_SAFE_NO_PAD
        .decode(encoded)
        .ok()
        .and_then(|bytes| Ciphertext::from_bytes(&bytes))
}
