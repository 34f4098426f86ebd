// src/store.rs
//! Append-only store of encoded batches
//!
//! Batches are never mutated or removed once appended. Reads address them
//! with wraparound, so `-1` is always the most recent batch.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::stream::Ciphertext;
use crate::core::util::wrap_index;
use crate::error::{ProtectError, Result};

/// One saved batch: the encoded strings of a single `save` call
pub type Batch = Arc<[Ciphertext]>;

#[derive(Debug, Default)]
pub struct RecordStore {
    batches: RwLock<Vec<Batch>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch; concurrent appends land in any order but never interleave
    pub fn push(&self, batch: Vec<Ciphertext>) {
        let batch: Batch = batch.into();
        let mut batches = self.batches.write();
        batches.push(batch);
        tracing::trace!(batches = batches.len(), "appended encrypted batch");
    }

    /// Batch at `index`, wrapped into range (negative counts from the end)
    pub fn get(&self, index: i64) -> Result<Batch> {
        let batches = self.batches.read();
        let slot = wrap_index(index, batches.len()).ok_or(ProtectError::EmptyStore)?;
        Ok(Arc::clone(&batches[slot]))
    }

    pub fn len(&self) -> usize {
        self.batches.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.read().is_empty()
    }

    /// Point-in-time copy of every batch, oldest first
    pub fn snapshot(&self) -> Vec<Batch> {
        self.batches.read().clone()
    }
}
