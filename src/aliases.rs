// src/aliases.rs
//! Zeroizing secret holders
//!
//! These are the canonical secret types used throughout arlot-protect.
//! Contents are wiped on drop and never shown by `Debug`.

/// Declare a `String` secret newtype that zeroizes on drop
macro_rules! secret_string {
    ($name:ident) => {
        #[derive(Clone, PartialEq, Eq, ::zeroize::Zeroize, ::zeroize::ZeroizeOnDrop)]
        pub struct $name(String);

        impl $name {
            pub fn new(secret: String) -> Self {
                Self(secret)
            }

            pub fn expose_secret(&self) -> &String {
                &self.0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, concat!(stringify!($name), "([REDACTED; {}])"), self.0.len())
            }
        }
    };
}

secret_string!(Password); // Plain or secure-key derived password
secret_string!(Alias); // Secondary credential of secure ciphers
secret_string!(SecureKey); // Raw secure key, before transformation
