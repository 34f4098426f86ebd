// src/consts.rs
//! Shared constants — password limits, alphabets and the embedded vault material

/// Shortest accepted password, in characters
pub const PASS_MIN_LENGTH: usize = 8;

/// Longest accepted password, in characters
pub const PASS_MAX_LENGTH: usize = 2_861_946;

/// Largest 16-bit character code; also perturbs the secure-key accumulator
pub const MAX_CHAR: u32 = 65_535;

/// Divisor applied to the secure-key accumulator between characters
pub const SECURE_KEY_DIVISOR: u32 = 6_000;

/// Characters valid in every password. Order is significant.
pub const BASE_ALPHABET: [char; 80] = [
    '.', ',', '?', '!', '-', '+', '=', '<', '>', '/', '\\', '|', '~', '&', '$', '%', '^', '*',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', //
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', //
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Extra characters accepted in secure keys, appended after the base alphabet
pub const SECURE_KEY_ADDED_CHARS: [char; 14] = [
    '@', '#', '(', ')', '[', ']', '{', '}', '`', '"', '\'', '_', ':', ';',
];

/// Legacy spelling of "no alias"; treated the same as `None`
pub const ABSENT_ALIAS: &str = "Doesn't Exist, Currently.";

/// Secure key the base encryption is built from
pub(crate) const BASE_SECURE_KEY: &str = "6684294889!!Rudie&rjf2294I:PFtwGbtiPS@AET*ALIASasPassword";

/// Alias bound to the base encryption (never usable for decode)
pub(crate) const BASE_ALIAS: &str =
    "TaxedEncriptionAlias@SytemProtectionIsToBeGuaranteedWithTheFollowingPad:6684294889!!Rudie&rjf2294I";

/// Format tag written into record exports
pub const EXPORT_FORMAT: &str = "arlot-protect-records-v1";

/// Default tracing filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
