// src/vault.rs
//! Base encryption — the process-wide credential vault
//!
//! One secure cipher, keyed from material embedded in the crate, wraps
//! other ciphers' passwords for export. It is built on first use, exactly
//! once, and lives until the process exits.

use once_cell::sync::OnceCell;

use crate::cipher::Cipher;
use crate::consts::{BASE_ALIAS, BASE_SECURE_KEY};
use crate::core::stream::Ciphertext;
use crate::error::Result;

static BASE_ENCRYPTION: OnceCell<CredentialVault> = OnceCell::new();

#[derive(Debug)]
pub struct CredentialVault {
    cipher: Cipher,
}

impl CredentialVault {
    /// The shared vault, initialized on first call
    pub fn global() -> Result<&'static CredentialVault> {
        BASE_ENCRYPTION.get_or_try_init(|| {
            tracing::info!("initializing base encryption");
            Self::from_material(BASE_SECURE_KEY, BASE_ALIAS)
        })
    }

    /// Build a standalone vault from a secure key and alias
    ///
    /// Useful for isolated tests; production code goes through [`global`](Self::global).
    pub fn from_material(secure_key: &str, alias: &str) -> Result<Self> {
        let cipher = Cipher::with_secure_key(true, secure_key, Some(alias))?.into_base();
        Ok(Self { cipher })
    }

    /// Wrap a password through the vault's keystream
    pub fn wrap(&self, password: &str) -> Ciphertext {
        self.cipher.encode_str(password)
    }

    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }
}
