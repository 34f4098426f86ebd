// tests/core/stream.rs
use arlot_protect::core::{build, decode, encode, Ciphertext};
use arlot_protect::CodeUnits;

const TEST_DATA: &str = "This is some test data.";

#[test]
fn test_encode_known_vectors() {
    let material = build("Testing1").unwrap();

    assert_eq!(
        encode(&material, "abc", CodeUnits::Wide).units(),
        &[187, 576, 455]
    );
    assert_eq!(
        encode(&material, TEST_DATA, CodeUnits::Wide).units(),
        &[
            174, 588, 473, 942, 126, 598, 515, 626, 213, 618, 509, 918, 134, 636, 497, 990, 222,
            476, 506, 934, 226, 614, 356
        ]
    );
}

#[test]
fn test_narrow_and_wide_agree_for_small_input() {
    let material = build("Testing1").unwrap();
    assert_eq!(
        encode(&material, TEST_DATA, CodeUnits::Wide),
        encode(&material, TEST_DATA, CodeUnits::Utf16)
    );
    let ct = encode(&material, TEST_DATA, CodeUnits::Utf16);
    assert_eq!(decode(&material, &ct, CodeUnits::Utf16).as_deref(), Some(TEST_DATA));
}

#[test]
fn test_decode_inverts_encode() {
    let material = build("Testing1").unwrap();
    for text in ["", "a", TEST_DATA, "ünïcödé ✓ 日本語", "emoji 🦀 survive"] {
        let ct = encode(&material, text, CodeUnits::Wide);
        assert_eq!(decode(&material, &ct, CodeUnits::Wide).as_deref(), Some(text));
    }
}

#[test]
fn test_each_string_restarts_keystream() {
    let material = build("Testing1").unwrap();
    let first = encode(&material, "abc", CodeUnits::Wide);
    let second = encode(&material, "abcabc", CodeUnits::Wide);
    assert_eq!(&second.units()[..3], first.units());
}

#[test]
fn test_wrong_key_does_not_recover_plaintext() {
    let right = build("Testing1").unwrap();
    let wrong = build("Password").unwrap();
    let ct = encode(&right, TEST_DATA, CodeUnits::Wide);
    assert_ne!(decode(&wrong, &ct, CodeUnits::Wide).as_deref(), Some(TEST_DATA));
}

#[test]
fn test_tampered_unit_is_rejected_in_wide_mode() {
    let material = build("Testing1").unwrap();
    let mut units = encode(&material, "abc", CodeUnits::Wide).units().to_vec();
    units[1] += 1;
    assert_eq!(
        decode(&material, &Ciphertext::from_units(units), CodeUnits::Wide),
        None
    );
}

#[test]
fn test_long_input_wraps_in_utf16_but_not_in_wide() {
    let material = build("Testing1").unwrap();
    let text = "a".repeat(30_000);

    let wide = encode(&material, &text, CodeUnits::Wide);
    assert!(wide.units().iter().any(|&u| u > u64::from(u16::MAX)));
    assert_eq!(decode(&material, &wide, CodeUnits::Wide).as_deref(), Some(text.as_str()));

    let narrow = encode(&material, &text, CodeUnits::Utf16);
    assert!(narrow.units().iter().all(|&u| u <= u64::from(u16::MAX)));
    assert_ne!(decode(&material, &narrow, CodeUnits::Utf16).as_deref(), Some(text.as_str()));
}

#[test]
fn test_ciphertext_byte_form() {
    let ct = Ciphertext::from_units(vec![1, 0x0102]);
    assert_eq!(ct.to_bytes(), [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 2]);
    assert_eq!(Ciphertext::from_bytes(&ct.to_bytes()), Some(ct));
    assert_eq!(Ciphertext::from_bytes(&[0u8; 7]), None);
}

#[test]
fn test_ciphertext_text_form() {
    let ct = Ciphertext::from_units(vec![187, 576, 455]);
    let text = ct.to_text(CodeUnits::Wide).unwrap();
    assert_eq!(Ciphertext::from_text(&text, CodeUnits::Wide), ct);

    // lone surrogate is not a char
    assert_eq!(Ciphertext::from_units(vec![0xD800]).to_text(CodeUnits::Wide), None);
}
