// tests/core/alphabet.rs
use std::collections::HashSet;

use arlot_protect::consts::{BASE_ALPHABET, SECURE_KEY_ADDED_CHARS};
use arlot_protect::core::{index_in_base, index_in_extended, is_valid_key, BASE_LEN, EXTENDED_LEN};

#[test]
fn test_alphabet_sizes_and_uniqueness() {
    assert_eq!(BASE_LEN, 80);
    assert_eq!(EXTENDED_LEN, 94);

    let all: HashSet<char> = BASE_ALPHABET
        .iter()
        .chain(SECURE_KEY_ADDED_CHARS.iter())
        .copied()
        .collect();
    assert_eq!(all.len(), 94);
}

#[test]
fn test_alphabet_order_is_symbols_digits_lower_upper() {
    assert_eq!(index_in_base('.'), Some(0));
    assert_eq!(index_in_base('*'), Some(17));
    assert_eq!(index_in_base('0'), Some(18));
    assert_eq!(index_in_base('a'), Some(28));
    assert_eq!(index_in_base('Z'), Some(79));
    assert_eq!(index_in_extended('@'), Some(80));
    assert_eq!(index_in_extended(';'), Some(93));
    assert_eq!(index_in_base('@'), None);
}

#[test]
fn test_is_valid_key_respects_secure_flag() {
    assert!(is_valid_key("Testing1", false));
    assert!(is_valid_key("Testing1", true));

    assert!(!is_valid_key("Test@ing1", false));
    assert!(is_valid_key("Test@ing1", true));

    assert!(!is_valid_key("with space", false));
    assert!(!is_valid_key("with space", true));
    assert!(!is_valid_key("café1234", true));
}

#[test]
fn test_empty_key_is_trivially_valid() {
    assert!(is_valid_key("", false));
}
