// src/cipher.rs
//! Cipher instances — the public face of the crate
//!
//! A `Cipher` is either fully keyed or never handed out. Its
//! `{password, key material, alias}` triple lives behind one `Arc` snapshot,
//! so a re-key swaps the whole triple at once and in-flight encodes keep
//! the snapshot they started with.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::aliases::{Alias, Password, SecureKey};
use crate::config;
use crate::consts::ABSENT_ALIAS;
use crate::core::alphabet::is_valid_key;
use crate::core::derive::{self, check_length, KeyMaterial};
use crate::core::secure_key::secure_key_to_pass;
use crate::core::stream::{self, Ciphertext};
use crate::enums::CodeUnits;
use crate::error::{ProtectError, Result};
use crate::store::RecordStore;
use crate::vault::CredentialVault;

struct KeyState {
    password: Password,
    alias: Option<Alias>,
    material: KeyMaterial,
}

/// Validate a plain password and derive its key material
fn keyed(password: &str) -> Result<(Password, KeyMaterial)> {
    check_length(password)?;
    if !is_valid_key(password, false) {
        return Err(ProtectError::InvalidCharset);
    }
    let material = derive::build(password)?;
    Ok((Password::new(password.to_owned()), material))
}

fn normalize_alias(alias: Option<&str>) -> Option<Alias> {
    alias
        .filter(|a| *a != ABSENT_ALIAS)
        .map(|a| Alias::new(a.to_owned()))
}

pub struct Cipher {
    state: RwLock<Arc<KeyState>>,
    is_secure: bool,
    is_base: bool,
    code_units: CodeUnits,
    records: RecordStore,
}

impl Cipher {
    fn assemble(state: KeyState, is_secure: bool) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
            is_secure,
            is_base: false,
            code_units: config::load().cipher.code_units,
            records: RecordStore::new(),
        }
    }

    /// Key a cipher with a plain password from the base alphabet
    pub fn new(password: &str) -> Result<Self> {
        let (password, material) = keyed(password)?;
        tracing::debug!(key_len = material.len(), "cipher keyed from password");
        Ok(Self::assemble(
            KeyState {
                password,
                alias: None,
                material,
            },
            false,
        ))
    }

    /// Key a cipher from a secure key (extended alphabet)
    ///
    /// With `is_secure` set the password and alias are frozen for the
    /// lifetime of the cipher and the alias unlocks `decode_with_alias`.
    pub fn with_secure_key(is_secure: bool, secure_key: &str, alias: Option<&str>) -> Result<Self> {
        let secure_key = SecureKey::new(secure_key.to_owned());
        let password = secure_key_to_pass(&secure_key)?;
        let material = derive::build(password.expose_secret())?;
        tracing::debug!(key_len = material.len(), is_secure, "cipher keyed from secure key");
        Ok(Self::assemble(
            KeyState {
                password,
                alias: normalize_alias(alias),
                material,
            },
            is_secure,
        ))
    }

    /// Override the configured code unit width for this cipher
    pub fn with_code_units(mut self, code_units: CodeUnits) -> Self {
        self.code_units = code_units;
        self
    }

    pub(crate) fn into_base(mut self) -> Self {
        self.is_base = true;
        self
    }

    fn snapshot(&self) -> Arc<KeyState> {
        Arc::clone(&self.state.read())
    }

    pub fn is_secure(&self) -> bool {
        self.is_secure
    }

    pub fn is_base(&self) -> bool {
        self.is_base
    }

    pub fn code_units(&self) -> CodeUnits {
        self.code_units
    }

    /// Encode every string of `data`, one ciphertext per string
    pub fn encode<S: AsRef<str>>(&self, data: &[S]) -> Vec<Ciphertext> {
        let state = self.snapshot();
        data.iter()
            .map(|text| stream::encode(&state.material, text.as_ref(), self.code_units))
            .collect()
    }

    /// Encode a single string
    pub fn encode_str(&self, text: &str) -> Ciphertext {
        stream::encode(&self.snapshot().material, text, self.code_units)
    }

    /// Decode `data`; `password` must equal the cipher's password
    pub fn decode(&self, password: &str, data: &[Ciphertext]) -> Result<Vec<String>> {
        let state = self.snapshot();
        if state.password.expose_secret().as_str() != password {
            tracing::warn!("decode rejected: wrong password");
            return Err(ProtectError::WrongCredential);
        }
        self.decode_with_state(&state, data)
    }

    /// Decode `data` on a secure cipher by presenting its alias
    pub fn decode_with_alias(&self, alias: &str, data: &[Ciphertext]) -> Result<Vec<String>> {
        if self.is_base {
            return Err(ProtectError::BaseInstanceForbidden);
        }
        let state = self.snapshot();
        let stored = match &state.alias {
            Some(stored) if self.is_secure => stored,
            _ => return Err(ProtectError::NotSecureOrNoAlias),
        };
        if stored.expose_secret().as_str() != alias {
            tracing::warn!("decode rejected: wrong alias");
            return Err(ProtectError::WrongCredential);
        }
        self.decode_with_state(&state, data)
    }

    fn decode_with_state(&self, state: &KeyState, data: &[Ciphertext]) -> Result<Vec<String>> {
        data.iter()
            .enumerate()
            .map(|(entry, ciphertext)| {
                stream::decode(&state.material, ciphertext, self.code_units)
                    .ok_or(ProtectError::MalformedCiphertext { entry })
            })
            .collect()
    }

    /// Re-key with a new password; on failure the previous key stays in place
    pub fn set_password(&self, password: &str) -> Result<()> {
        if self.is_secure {
            return Err(ProtectError::FrozenConfiguration(
                "cannot change a secure password",
            ));
        }
        let (password, material) = keyed(password)?;

        let mut state = self.state.write();
        let alias = state.alias.as_ref().map(|a| Alias::new(a.expose_secret().clone()));
        *state = Arc::new(KeyState {
            password,
            alias,
            material,
        });
        tracing::info!(key_len = state.material.len(), "cipher re-keyed");
        Ok(())
    }

    pub fn set_alias(&self, alias: &str) -> Result<()> {
        if self.is_secure {
            return Err(ProtectError::FrozenConfiguration(
                "cannot change a secure alias",
            ));
        }
        let mut state = self.state.write();
        let next = KeyState {
            password: Password::new(state.password.expose_secret().clone()),
            alias: normalize_alias(Some(alias)),
            material: state.material.clone(),
        };
        *state = Arc::new(next);
        Ok(())
    }

    /// The password, wrapped by the process-wide base encryption
    pub fn get_password(&self) -> Result<Ciphertext> {
        self.get_password_with(CredentialVault::global()?)
    }

    /// The password, wrapped by an explicit vault
    pub fn get_password_with(&self, vault: &CredentialVault) -> Result<Ciphertext> {
        if self.is_secure {
            return Err(ProtectError::FrozenConfiguration(
                "cannot provide a secure password",
            ));
        }
        Ok(vault.wrap(self.snapshot().password.expose_secret()))
    }

    pub fn get_alias(&self) -> Option<String> {
        self.snapshot()
            .alias
            .as_ref()
            .map(|alias| alias.expose_secret().clone())
    }

    /// Store a batch; plain batches are encoded first
    ///
    /// With `is_encrypted` set the strings are taken to already hold
    /// encoded characters and are stored as-is.
    pub fn save<S: AsRef<str>>(&self, data: &[S], is_encrypted: bool) {
        let batch = if is_encrypted {
            data.iter()
                .map(|text| Ciphertext::from_text(text.as_ref(), self.code_units))
                .collect()
        } else {
            self.encode(data)
        };
        self.records.push(batch);
    }

    /// Store a batch that is already encoded, unchanged
    pub fn save_encoded(&self, batch: Vec<Ciphertext>) {
        self.records.push(batch);
    }

    /// Saved batch at `index`; negative indices count from the newest
    pub fn get_encrypted_data(&self, index: i64) -> Result<Vec<Ciphertext>> {
        Ok(self.records.get(index)?.to_vec())
    }

    /// This cipher's saved batches
    pub fn records(&self) -> &RecordStore {
        &self.records
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("is_secure", &self.is_secure)
            .field("is_base", &self.is_base)
            .field("code_units", &self.code_units)
            .field("key_material", &self.snapshot().material)
            .field("saved_batches", &self.records.len())
            .finish_non_exhaustive()
    }
}
