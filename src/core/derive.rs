// src/core/derive.rs
//! Key derivation — password → keystream material
//!
//! The password is folded into one big integer which is then unpacked
//! digit by digit in base `BASE_LEN / 2`. Every digit picks one character
//! of the base alphabet, so each key character depends on the whole
//! password.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Signed;

use crate::consts::{BASE_ALPHABET, PASS_MAX_LENGTH, PASS_MIN_LENGTH};
use crate::core::alphabet::BASE_LEN;
use crate::error::{ProtectError, Result};

/// Derived keystream characters, always non-empty and drawn from the base alphabet
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial(String);

impl KeyMaterial {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character code of the key at a 0-based position
    ///
    /// Key material is pure ASCII, so byte and character positions agree.
    pub fn code_at(&self, position: usize) -> u32 {
        u32::from(self.0.as_bytes()[position])
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyMaterial([REDACTED; {}])", self.0.len())
    }
}

/// Reject passwords outside `[PASS_MIN_LENGTH, PASS_MAX_LENGTH]` characters
pub fn check_length(password: &str) -> Result<usize> {
    let len = password.chars().count();
    if (PASS_MIN_LENGTH..=PASS_MAX_LENGTH).contains(&len) {
        Ok(len)
    } else {
        Err(ProtectError::InvalidPasswordLength(len))
    }
}

/// Fold the password codes into the derivation seed
///
/// `(c0 + c1) * c[n-1] * c[n-2]`, plus every code in between, then
/// `floor(seed * n / 2)`.
fn seed_from(codes: &[u32]) -> BigInt {
    let n = codes.len();

    let mut seed = BigInt::from(codes[0]) + codes[1];
    seed *= codes[n - 1];
    seed *= codes[n - 2];

    for &c in &codes[2..n - 2] {
        seed += c;
    }

    // seed is positive here, so truncating division is floor
    seed * n / 2u32
}

/// Build key material from a password
pub fn build(password: &str) -> Result<KeyMaterial> {
    check_length(password)?;

    let codes: Vec<u32> = password.chars().map(u32::from).collect();
    let mut seed = seed_from(&codes);

    let half = (BASE_LEN / 2) as u32;
    let mut key = String::new();

    // the `- 2` guarantees termination once seed / half stalls near zero
    while seed.is_positive() {
        // seed is positive, so the remainder is in [0, half); zero has no digits
        let digit = (&seed % half).magnitude().iter_u32_digits().next().unwrap_or(0);
        key.push(BASE_ALPHABET[digit as usize]);
        seed = &seed / half - 2u32;
    }

    debug_assert!(!key.is_empty(), "key material must never be empty");
    tracing::debug!(key_len = key.len(), "derived key material");

    Ok(KeyMaterial(key))
}
