// src/core/stream.rs
//! Stream transform — pure functions over key material, no credentials
//!
//! Every string restarts the keystream: `count` cycles through `1..=L`
//! (L = key length) and `overcount` is the 0-based position. With `a` the
//! code of key character `count - 1`:
//!
//! ```text
//! encode: out = (v * count + a) + (overcount + a) * count
//! decode: out = ((v - (overcount + a) * count) - a) / count
//! ```

use serde::{Deserialize, Serialize};

use crate::core::derive::KeyMaterial;
use crate::enums::CodeUnits;

/// One encoded string, held as integer code units
///
/// Units are 64 bits wide so the `Wide` transform never wraps.
/// In `Utf16` mode every unit fits in 16 bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ciphertext(Vec<u64>);

impl Ciphertext {
    pub fn from_units(units: Vec<u64>) -> Self {
        Self(units)
    }

    pub fn units(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a string that already holds encoded characters
    pub fn from_text(text: &str, code_units: CodeUnits) -> Self {
        match code_units {
            CodeUnits::Wide => Self(text.chars().map(|c| u64::from(u32::from(c))).collect()),
            CodeUnits::Utf16 => Self(text.encode_utf16().map(u64::from).collect()),
        }
    }

    /// Render the units as characters, if every unit is one
    pub fn to_text(&self, code_units: CodeUnits) -> Option<String> {
        match code_units {
            CodeUnits::Wide => self
                .0
                .iter()
                .map(|&u| u32::try_from(u).ok().and_then(char::from_u32))
                .collect(),
            CodeUnits::Utf16 => {
                let units = self
                    .0
                    .iter()
                    .map(|&u| u16::try_from(u).ok())
                    .collect::<Option<Vec<u16>>>()?;
                String::from_utf16(&units).ok()
            }
        }
    }

    /// Big-endian, 8 bytes per unit
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|u| u.to_be_bytes()).collect()
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let chunks = bytes.chunks_exact(8);
        if !chunks.remainder().is_empty() {
            return None;
        }
        chunks
            .map(|chunk| chunk.try_into().ok().map(u64::from_be_bytes))
            .collect::<Option<Vec<u64>>>()
            .map(Self)
    }
}

/// `(count, a)` for a position: count in `1..=L`, `a` the key code it selects
fn key_step(material: &KeyMaterial, overcount: usize) -> (usize, u32) {
    let count = overcount % material.len() + 1;
    (count, material.code_at(count - 1))
}

/// Encode one string against the key material
pub fn encode(material: &KeyMaterial, text: &str, code_units: CodeUnits) -> Ciphertext {
    match code_units {
        CodeUnits::Wide => encode_wide(material, text),
        CodeUnits::Utf16 => encode_utf16(material, text),
    }
}

/// Invert [`encode`]; `None` when the units do not map back to text
pub fn decode(material: &KeyMaterial, ciphertext: &Ciphertext, code_units: CodeUnits) -> Option<String> {
    match code_units {
        CodeUnits::Wide => decode_wide(material, ciphertext),
        CodeUnits::Utf16 => decode_utf16(material, ciphertext),
    }
}

fn encode_wide(material: &KeyMaterial, text: &str) -> Ciphertext {
    let units = text
        .chars()
        .enumerate()
        .map(|(overcount, c)| {
            let (count, a) = key_step(material, overcount);
            let (v, count, a, over) = (
                u64::from(u32::from(c)),
                count as u64,
                u64::from(a),
                overcount as u64,
            );
            (v * count + a) + (over + a) * count
        })
        .collect();
    Ciphertext(units)
}

fn decode_wide(material: &KeyMaterial, ciphertext: &Ciphertext) -> Option<String> {
    ciphertext
        .units()
        .iter()
        .enumerate()
        .map(|(overcount, &v)| {
            let (count, a) = key_step(material, overcount);
            let (count, a, over) = (count as u64, u64::from(a), overcount as u64);

            let shifted = v
                .checked_sub(over.checked_add(a)?.checked_mul(count)?)?
                .checked_sub(a)?;
            if shifted % count != 0 {
                return None;
            }
            char::from_u32(u32::try_from(shifted / count).ok()?)
        })
        .collect()
}

// 32-bit wrapping arithmetic, output truncated to 16 bits
fn encode_utf16(material: &KeyMaterial, text: &str) -> Ciphertext {
    let units = text
        .encode_utf16()
        .enumerate()
        .map(|(overcount, unit)| {
            let (count, a) = key_step(material, overcount);
            let (c, count, a, over) = (i32::from(unit), count as i32, a as i32, overcount as i32);
            let digchar = c
                .wrapping_mul(count)
                .wrapping_add(a)
                .wrapping_add(over.wrapping_add(a).wrapping_mul(count));
            u64::from(digchar as u16)
        })
        .collect();
    Ciphertext(units)
}

fn decode_utf16(material: &KeyMaterial, ciphertext: &Ciphertext) -> Option<String> {
    let units = ciphertext
        .units()
        .iter()
        .enumerate()
        .map(|(overcount, &v)| {
            let v = u16::try_from(v).ok()?;
            let (count, a) = key_step(material, overcount);
            let (count, a, over) = (count as i32, a as i32, overcount as i32);
            let digchar = i32::from(v)
                .wrapping_sub(over.wrapping_add(a).wrapping_mul(count))
                .wrapping_sub(a)
                .wrapping_div(count);
            Some(digchar as u16)
        })
        .collect::<Option<Vec<u16>>>()?;
    String::from_utf16(&units).ok()
}
