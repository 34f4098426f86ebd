// src/core/alphabet.rs
//! Character sets accepted in passwords and secure keys
//!
//! Both sets are ordered: key derivation and the secure-key transform
//! index into them positionally.

use crate::consts::{BASE_ALPHABET, SECURE_KEY_ADDED_CHARS};

/// Number of characters in the base alphabet
pub const BASE_LEN: usize = BASE_ALPHABET.len();

/// Number of characters in the extended (secure-key) alphabet
pub const EXTENDED_LEN: usize = BASE_ALPHABET.len() + SECURE_KEY_ADDED_CHARS.len();

/// Position of `c` in the base alphabet
pub fn index_in_base(c: char) -> Option<usize> {
    BASE_ALPHABET.iter().position(|&b| b == c)
}

/// Position of `c` in base + secure-key additions
pub fn index_in_extended(c: char) -> Option<usize> {
    index_in_base(c).or_else(|| {
        SECURE_KEY_ADDED_CHARS
            .iter()
            .position(|&b| b == c)
            .map(|i| BASE_LEN + i)
    })
}

/// True iff every character of `key` belongs to the allowed alphabet
///
/// `secure` widens the alphabet with the secure-key additions.
pub fn is_valid_key(key: &str, secure: bool) -> bool {
    key.chars().all(|c| {
        if secure {
            index_in_extended(c).is_some()
        } else {
            index_in_base(c).is_some()
        }
    })
}
