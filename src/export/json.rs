// src/export/json.rs
use std::path::Path;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::consts::EXPORT_FORMAT;
use crate::core::stream::Ciphertext;
use crate::enums::CodeUnits;
use crate::error::{ProtectError, Result};
use crate::store::RecordStore;

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordExport {
    pub export_format: String,
    pub exported_at: String,
    pub exporter_version: String,
    pub code_units: CodeUnits,
    pub total_batches: usize,
    pub batches: Vec<BatchExport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchExport {
    pub index: usize,
    /// BLAKE3 over the raw unit bytes of every entry, in order
    pub fingerprint: String,
    /// Base64URL (no padding) of each entry's big-endian units
    pub entries: Vec<String>,
}

fn fingerprint(batch: &[Ciphertext]) -> String {
    let mut hasher = blake3::Hasher::new();
    for ciphertext in batch {
        hasher.update(&ciphertext.to_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

/// Export every saved batch to a portable JSON file using Base64URL encoding.
///
/// Only ciphertext is written; decoding still needs the cipher's password.
pub fn export_records_to_json<P: AsRef<Path>>(
    store: &RecordStore,
    code_units: CodeUnits,
    path: P,
) -> Result<usize> {
    let batches: Vec<BatchExport> = store
        .snapshot()
        .iter()
        .enumerate()
        .map(|(index, batch)| BatchExport {
            index,
            fingerprint: fingerprint(batch),
            entries: batch
                .iter()
                .map(|ciphertext| URL_SAFE_NO_PAD.encode(ciphertext.to_bytes()))
                .collect(),
        })
        .collect();

    let export = RecordExport {
        export_format: EXPORT_FORMAT.to_owned(),
        exported_at: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        exporter_version: env!("CARGO_PKG_VERSION").to_owned(),
        code_units,
        total_batches: batches.len(),
        batches,
    };

    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&export)?)?;
    tracing::info!(
        "exported {} batch(es) → {}",
        export.total_batches,
        path.as_ref().display()
    );

    Ok(export.total_batches)
}

/// Append every batch of an export file to `store`, oldest first
///
/// The whole file is validated before anything is appended, so a bad entry
/// leaves the store untouched.
pub fn import_records_from_json<P: AsRef<Path>>(path: P, store: &RecordStore) -> Result<usize> {
    let export: RecordExport = serde_json::from_str(&std::fs::read_to_string(path.as_ref())?)?;

    let mut decoded = Vec::with_capacity(export.batches.len());
    for batch in &export.batches {
        let mut entries = Vec::with_capacity(batch.entries.len());
        for (entry, encoded) in batch.entries.iter().enumerate() {
            let bytes = URL_SAFE_NO_PAD.decode(encoded)?;
            let ciphertext =
                Ciphertext::from_bytes(&bytes).ok_or(ProtectError::MalformedCiphertext { entry })?;
            entries.push(ciphertext);
        }
        if fingerprint(&entries) != batch.fingerprint {
            tracing::warn!(index = batch.index, "fingerprint mismatch in import");
            return Err(ProtectError::FingerprintMismatch { batch: batch.index });
        }
        decoded.push(entries);
    }

    let count = decoded.len();
    for batch in decoded {
        store.push(batch);
    }
    tracing::info!("imported {count} batch(es) from {}", path.as_ref().display());

    Ok(count)
}
