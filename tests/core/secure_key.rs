// tests/core/secure_key.rs
use arlot_protect::aliases::SecureKey;
use arlot_protect::core::{build, secure_key_to_pass};
use arlot_protect::ProtectError;

#[test]
fn test_secure_key_transform_vector() {
    let password = secure_key_to_pass(&SecureKey::new("Secure#Key_2024".to_string())).unwrap();
    let codes: Vec<u32> = password.expose_secret().chars().map(u32::from).collect();
    assert_eq!(
        codes,
        [77, 71, 69, 87, 84, 71, 63, 74, 71, 91, 98, 40, 38, 40, 42]
    );
    assert_eq!(build(password.expose_secret()).unwrap().as_str(), "%+<9");
}

#[test]
fn test_secure_key_transform_preserves_length() {
    let key = "6684294889!!Rudie&rjf2294I:PFtwGbtiPS@AET*ALIASasPassword";
    let password = secure_key_to_pass(&SecureKey::new(key.to_string())).unwrap();
    assert_eq!(password.expose_secret().chars().count(), 57);

    let codes: Vec<u32> = password.expose_secret().chars().take(13).map(u32::from).collect();
    assert_eq!(codes, [39, 44, 46, 42, 40, 47, 42, 46, 46, 47, 23, 23, 81]);
}

#[test]
fn test_secure_key_rejects_foreign_characters() {
    for bad in ["has space in it", "tab\tseparated", "ünïcödé-key"] {
        assert!(
            matches!(
                secure_key_to_pass(&SecureKey::new(bad.to_string())),
                Err(ProtectError::InvalidCharset)
            ),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_secure_key_accepts_extended_characters() {
    let key = "@#()[]{}`\"'_:;abc";
    assert!(secure_key_to_pass(&SecureKey::new(key.to_string())).is_ok());
}
