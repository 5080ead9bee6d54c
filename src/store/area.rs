use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub(crate) const RESULTS_SLOT: &str = "recent_scans";
pub(crate) const THEME_SLOT: &str = "theme";
pub(crate) const FEEDBACK_SLOT: &str = "feedback";

/// Named JSON slots under a single root directory, one per persisted
/// dashboard surface.
#[derive(Debug, Clone)]
pub struct StorageArea {
    root: PathBuf,
}

impl StorageArea {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StorageArea { root: root.into() }
    }

    /// Per-user default location, `None` when the platform exposes no data
    /// directory.
    pub fn open_default() -> Option<Self> {
        dirs::data_dir().map(|mut path| {
            path.push("threatscope");
            StorageArea::new(path)
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }

    /// Read a slot, failing open: a missing file reads as `None`, and
    /// content that no longer parses is discarded with a warning instead
    /// of an error.
    pub(crate) fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let path = self.slot_path(slot);
        let raw = fs::read(&path).ok()?;
        match serde_json::from_slice(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding corrupt slot {}: {}", path.display(), err);
                None
            }
        }
    }

    pub(crate) fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let data = serde_json::to_vec_pretty(value)?;
        fs::write(self.slot_path(slot), data)?;
        Ok(())
    }
}
