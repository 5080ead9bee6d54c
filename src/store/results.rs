use crate::analyzer::ScanResult;
use crate::error::Result;

use super::area::{StorageArea, RESULTS_SLOT};

/// Persisted scan history, most recently scanned first. History never
/// expires; unbounded growth is accepted.
#[derive(Debug, Clone)]
pub struct ResultStore {
    storage: StorageArea,
}

impl ResultStore {
    pub fn new(storage: StorageArea) -> Self {
        ResultStore { storage }
    }

    /// Previously persisted results, or empty when the slot is missing or
    /// unreadable.
    pub fn load(&self) -> Vec<ScanResult> {
        self.storage.read_slot(RESULTS_SLOT).unwrap_or_default()
    }

    /// Overwrite the slot with the full ordered sequence.
    pub fn save(&self, all: &[ScanResult]) -> Result<()> {
        self.storage.write_slot(RESULTS_SLOT, &all)
    }

    /// New results go in front; existing entries keep their relative order.
    pub fn merge(new: Vec<ScanResult>, existing: Vec<ScanResult>) -> Vec<ScanResult> {
        let mut merged = new;
        merged.extend(existing);
        merged
    }

    /// Load, merge, and save in one step so no caller interleaves between
    /// the read and the write. Returns the merged sequence.
    pub fn commit(&self, new: Vec<ScanResult>) -> Result<Vec<ScanResult>> {
        let merged = Self::merge(new, self.load());
        self.save(&merged)?;
        Ok(merged)
    }
}
