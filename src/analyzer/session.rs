use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::classifier::{classify, CandidateItem, ItemKind, ThreatLevel};
use super::pending::PendingItems;
use crate::error::{Result, ScopeError};

/// Immutable record produced once per candidate item per scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub id: String,
    pub kind: ItemKind,
    pub label: String,
    pub scanned_at: DateTime<Utc>,
    pub threat_level: ThreatLevel,
}

/// Runs scan batches. Keeps the last issued timestamp so stamps never go
/// backwards within a session even if the system clock does.
#[derive(Debug, Default)]
pub struct ScanSession {
    last_stamp: Option<DateTime<Utc>>,
}

impl ScanSession {
    pub fn new() -> Self {
        ScanSession::default()
    }

    /// Classify every pending item, files then links then phones, keeping
    /// insertion order within each buffer. Fails with `NoInput` when all
    /// three buffers are empty. The buffers are left untouched either way;
    /// clearing them after the commit is the caller's half of the two-step
    /// commit.
    pub fn run_scan(&mut self, pending: &PendingItems) -> Result<Vec<ScanResult>> {
        if pending.is_empty() {
            return Err(ScopeError::NoInput);
        }

        let mut results = Vec::with_capacity(pending.len());
        for name in pending.files() {
            results.push(self.record(CandidateItem::file(name.clone())));
        }
        for url in pending.links() {
            results.push(self.record(CandidateItem::link(url.clone())));
        }
        for raw in pending.phones() {
            results.push(self.record(CandidateItem::phone(raw.clone())));
        }
        Ok(results)
    }

    fn record(&mut self, item: CandidateItem) -> ScanResult {
        let threat_level = classify(&item);
        ScanResult {
            id: Uuid::new_v4().to_string(),
            kind: item.kind(),
            label: item.into_label(),
            scanned_at: self.next_stamp(),
            threat_level,
        }
    }

    fn next_stamp(&mut self) -> DateTime<Utc> {
        let mut stamp = Utc::now();
        if let Some(last) = self.last_stamp {
            stamp = stamp.max(last);
        }
        self.last_stamp = Some(stamp);
        stamp
    }
}
