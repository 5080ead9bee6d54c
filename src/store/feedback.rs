use crate::error::{Result, ScopeError};

use super::area::{StorageArea, FEEDBACK_SLOT};

/// Free-text feedback entries, newest first, independent of scanning.
#[derive(Debug)]
pub struct FeedbackLog {
    storage: StorageArea,
    entries: Vec<String>,
}

impl FeedbackLog {
    /// Load the persisted log, failing open to empty.
    pub fn load(storage: StorageArea) -> Self {
        let entries = storage.read_slot(FEEDBACK_SLOT).unwrap_or_default();
        FeedbackLog { storage, entries }
    }

    /// Prepend one entry and persist. Blank submissions are rejected and
    /// leave the slot untouched.
    pub fn submit(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ScopeError::EmptyFeedback);
        }
        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(text.to_string());
        updated.extend(self.entries.iter().cloned());
        self.storage.write_slot(FEEDBACK_SLOT, &updated)?;
        self.entries = updated;
        Ok(())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
