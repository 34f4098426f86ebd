// src/core/secure_key.rs
//! Secure key → internal password
//!
//! A running accumulator mixes each character's alphabet position with its
//! code; every step emits one password character, then the accumulator is
//! squeezed before the next character.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::aliases::{Password, SecureKey};
use crate::consts::{MAX_CHAR, SECURE_KEY_DIVISOR};
use crate::core::alphabet::index_in_extended;
use crate::error::{ProtectError, Result};

/// Transform a secure key into the password its cipher is keyed with
///
/// Fails with `InvalidCharset` if the key holds anything outside the
/// extended alphabet.
pub fn secure_key_to_pass(secure_key: &SecureKey) -> Result<Password> {
    let mut acc = BigInt::zero();
    let mut password = String::with_capacity(secure_key.expose_secret().len());

    for c in secure_key.expose_secret().chars() {
        let index = index_in_extended(c).ok_or(ProtectError::InvalidCharset)?;

        acc = (acc + index + u32::from(c)) / 2u32;
        let emitted = acc
            .to_u32()
            .and_then(char::from_u32)
            .ok_or(ProtectError::InvalidCharset)?;
        password.push(emitted);

        acc = (acc + MAX_CHAR) / SECURE_KEY_DIVISOR;
    }

    Ok(Password::new(password))
}
