use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::area::{StorageArea, THEME_SLOT};

/// Dashboard color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Theme slot with load-at-start / save-on-change lifecycle.
#[derive(Debug, Clone)]
pub struct ThemePref {
    storage: StorageArea,
}

impl ThemePref {
    pub fn new(storage: StorageArea) -> Self {
        ThemePref { storage }
    }

    pub fn load(&self) -> Theme {
        self.storage.read_slot(THEME_SLOT).unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        self.storage.write_slot(THEME_SLOT, &theme)
    }
}
