// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the #[derive(...)] enums that represent
//! user-visible choices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtectError;

/// How ciphertext characters are represented as integers
///
/// `Wide` keeps every intermediate value exact, so decode always inverts
/// encode. `Utf16` reproduces the historical 16-bit behaviour: plaintext is
/// walked as UTF-16 code units, arithmetic wraps at 32 bits and every output
/// unit is truncated to 16 bits, which can break the round trip for long
/// strings or large key positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CodeUnits {
    #[default]
    Wide,
    Utf16,
}

impl CodeUnits {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeUnits::Wide => "wide",
            CodeUnits::Utf16 => "utf16",
        }
    }
}

impl fmt::Display for CodeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeUnits {
    type Err = ProtectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(CodeUnits::Wide),
            "utf16" | "utf-16" | "legacy" => Ok(CodeUnits::Utf16),
            other => Err(ProtectError::InvalidCodeUnits(other.to_owned())),
        }
    }
}
