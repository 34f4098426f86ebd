// src/export/mod.rs
//! Export utilities for arlot-protect
//!
//! Saved batches leave the process as JSON; only ciphertext is written.

pub use json::{export_records_to_json, import_records_from_json, BatchExport, RecordExport};

pub mod json;
