mod analyzer;
mod dashboard;
mod error;
mod store;

pub use analyzer::{
    classify, CandidateItem, ItemKind, PendingItems, ScanResult, ScanSession, ThreatLevel,
    ACCEPTED_UPLOAD_EXTENSIONS,
};
pub use dashboard::{Dashboard, RiskDistribution, ScanStats, SECURITY_TIPS};
pub use error::{Result, ScopeError};
pub use store::{FeedbackLog, ResultStore, StorageArea, Theme, ThemePref};
