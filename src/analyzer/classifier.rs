use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

const HIGH_RISK_EXTENSIONS: &[&str] = &["exe", "js", "bat", "scr"];
const LOW_RISK_EXTENSIONS: &[&str] = &["doc", "pdf", "txt", "log"];

const HIGH_RISK_LINK_TERMS: &[&str] = &["malware", "phish"];
const SUSPICIOUS_LINK_TERMS: &[&str] = &[
    "free", "login", "verify", "bank", "update", "secure", "confirm",
];

const RISKY_PHONE_PREFIXES: &[&str] = &["123", "000", "999"];

lazy_static! {
    /// Optional leading `+`, then 10 to 14 digits, nothing else.
    static ref PHONE_PATTERN: Regex =
        Regex::new(r"^\+?[0-9]{10,14}$").expect("phone pattern is valid");
}

/// Severity bucket assigned to every scanned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Link,
    Phone,
}

/// One queued item awaiting a scan. File content is never inspected;
/// classification only consults the name, URL, or raw number string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateItem {
    File { name: String },
    Link { url: String },
    Phone { raw: String },
}

impl CandidateItem {
    pub fn file(name: impl Into<String>) -> Self {
        CandidateItem::File { name: name.into() }
    }

    pub fn link(url: impl Into<String>) -> Self {
        CandidateItem::Link { url: url.into() }
    }

    pub fn phone(raw: impl Into<String>) -> Self {
        CandidateItem::Phone { raw: raw.into() }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            CandidateItem::File { .. } => ItemKind::File,
            CandidateItem::Link { .. } => ItemKind::Link,
            CandidateItem::Phone { .. } => ItemKind::Phone,
        }
    }

    /// Display string: the file name, URL, or phone string as entered.
    pub fn label(&self) -> &str {
        match self {
            CandidateItem::File { name } => name,
            CandidateItem::Link { url } => url,
            CandidateItem::Phone { raw } => raw,
        }
    }

    pub fn into_label(self) -> String {
        match self {
            CandidateItem::File { name } => name,
            CandidateItem::Link { url } => url,
            CandidateItem::Phone { raw } => raw,
        }
    }
}

/// Classify one candidate item. Pure and total: the same item always maps
/// to the same level, and every input gets one.
pub fn classify(item: &CandidateItem) -> ThreatLevel {
    match item {
        CandidateItem::File { name } => classify_file_name(name),
        CandidateItem::Link { url } => classify_link(url),
        CandidateItem::Phone { raw } => classify_phone(raw),
    }
}

fn classify_file_name(name: &str) -> ThreatLevel {
    // Extension is whatever follows the last dot; a dotless name has none.
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    if HIGH_RISK_EXTENSIONS.contains(&extension.as_str()) {
        ThreatLevel::High
    } else if LOW_RISK_EXTENSIONS.contains(&extension.as_str()) {
        ThreatLevel::Low
    } else {
        ThreatLevel::Medium
    }
}

fn classify_link(url: &str) -> ThreatLevel {
    let url = url.to_lowercase();
    // High-severity terms win over the suspicious set when both match.
    if HIGH_RISK_LINK_TERMS.iter().any(|term| url.contains(term)) {
        ThreatLevel::High
    } else if SUSPICIOUS_LINK_TERMS.iter().any(|term| url.contains(term)) {
        ThreatLevel::Medium
    } else {
        ThreatLevel::Low
    }
}

fn classify_phone(raw: &str) -> ThreatLevel {
    if !PHONE_PATTERN.is_match(raw) {
        return ThreatLevel::Medium;
    }
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if RISKY_PHONE_PREFIXES
        .iter()
        .any(|prefix| digits.starts_with(prefix))
    {
        ThreatLevel::High
    } else {
        ThreatLevel::Low
    }
}
