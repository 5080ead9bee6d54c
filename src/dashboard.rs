use serde::Serialize;

use crate::analyzer::{PendingItems, ScanResult, ScanSession, ThreatLevel};
use crate::error::{Result, ScopeError};
use crate::store::{FeedbackLog, ResultStore, StorageArea, Theme, ThemePref};

/// Static advice shown alongside the scan history.
pub const SECURITY_TIPS: &[&str] = &[
    "Always update your software",
    "Check suspicious links before clicking",
    "Use strong and unique passwords",
    "Scan files from unknown sources",
    "Backup important data regularly",
];

/// Aggregate numbers for the dashboard header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub total_scanned: usize,
    pub threats_found: usize,
    pub risk_distribution: RiskDistribution,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Dashboard state: ingestion buffers, the scan session, and the persisted
/// slots, loaded once at startup and saved on change.
pub struct Dashboard {
    pending: PendingItems,
    session: ScanSession,
    results: Vec<ScanResult>,
    result_store: ResultStore,
    theme: Theme,
    theme_pref: ThemePref,
    feedback: FeedbackLog,
    scanning: bool,
}

impl Dashboard {
    pub fn open(storage: StorageArea) -> Self {
        let result_store = ResultStore::new(storage.clone());
        let theme_pref = ThemePref::new(storage.clone());
        let results = result_store.load();
        let theme = theme_pref.load();
        let feedback = FeedbackLog::load(storage);
        Dashboard {
            pending: PendingItems::new(),
            session: ScanSession::new(),
            results,
            result_store,
            theme,
            theme_pref,
            feedback,
            scanning: false,
        }
    }

    pub fn add_file(&mut self, name: &str) -> bool {
        self.pending.add_file(name)
    }

    pub fn add_link(&mut self, url: &str) -> bool {
        self.pending.add_link(url)
    }

    pub fn add_phone(&mut self, raw: &str) -> bool {
        self.pending.add_phone(raw)
    }

    pub fn pending(&self) -> &PendingItems {
        &self.pending
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    /// Scan everything queued and commit the batch to the history. At most
    /// one scan runs at a time; a request while one is in flight is
    /// rejected, not queued. Pending buffers are cleared only once the
    /// commit has landed, so a failed save can be retried without
    /// double-scanning.
    pub fn start_scan(&mut self) -> Result<Vec<ScanResult>> {
        if self.scanning {
            return Err(ScopeError::ScanInProgress);
        }
        self.scanning = true;
        let outcome = self.scan_and_commit();
        self.scanning = false;
        outcome
    }

    fn scan_and_commit(&mut self) -> Result<Vec<ScanResult>> {
        let batch = self.session.run_scan(&self.pending)?;
        self.results = self.result_store.commit(batch.clone())?;
        self.pending.clear();
        Ok(batch)
    }

    /// Full history, most recently scanned first.
    pub fn recent_scans(&self) -> &[ScanResult] {
        &self.results
    }

    pub fn stats(&self) -> ScanStats {
        let count = |level: ThreatLevel| {
            self.results
                .iter()
                .filter(|result| result.threat_level == level)
                .count()
        };
        let high = count(ThreatLevel::High);
        ScanStats {
            total_scanned: self.results.len(),
            threats_found: high,
            risk_distribution: RiskDistribution {
                high,
                medium: count(ThreatLevel::Medium),
                low: count(ThreatLevel::Low),
            },
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme_pref.save(theme)?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme.toggle();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn submit_feedback(&mut self, text: &str) -> Result<()> {
        self.feedback.submit(text)
    }

    pub fn feedback(&self) -> &[String] {
        self.feedback.entries()
    }
}
