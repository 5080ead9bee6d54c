#[cfg(test)]
mod tests {
    use super::super::classifier::{classify, CandidateItem, ThreatLevel};
    use super::super::pending::PendingItems;
    use super::super::session::ScanSession;
    use crate::error::ScopeError;

    #[test]
    fn classify_is_deterministic_for_file_names() {
        let item = CandidateItem::file("quarterly-report.xlsx");
        let first = classify(&item);
        for _ in 0..10 {
            assert_eq!(classify(&item), first);
        }
    }

    #[test]
    fn executable_extensions_are_high_risk() {
        assert_eq!(classify(&CandidateItem::file("a.exe")), ThreatLevel::High);
        assert_eq!(
            classify(&CandidateItem::file("payload.BAT")),
            ThreatLevel::High
        );
        assert_eq!(
            classify(&CandidateItem::file("installer.scr")),
            ThreatLevel::High
        );
    }

    #[test]
    fn document_extensions_are_low_risk() {
        assert_eq!(classify(&CandidateItem::file("a.doc")), ThreatLevel::Low);
        assert_eq!(classify(&CandidateItem::file("notes.TXT")), ThreatLevel::Low);
    }

    #[test]
    fn unknown_extensions_are_medium_risk() {
        assert_eq!(classify(&CandidateItem::file("a.png")), ThreatLevel::Medium);
        assert_eq!(
            classify(&CandidateItem::file("archive.tar.gz")),
            ThreatLevel::Medium
        );
    }

    #[test]
    fn dotless_file_name_is_medium_risk() {
        assert_eq!(classify(&CandidateItem::file("README")), ThreatLevel::Medium);
        // Even when the whole name matches a high-risk extension.
        assert_eq!(classify(&CandidateItem::file("exe")), ThreatLevel::Medium);
    }

    #[test]
    fn suspicious_link_keywords_are_medium_risk() {
        assert_eq!(
            classify(&CandidateItem::link("http://free-login-bank.com")),
            ThreatLevel::Medium
        );
    }

    #[test]
    fn malware_terms_outrank_suspicious_keywords() {
        // Contains "free" too; the high-severity term must win.
        assert_eq!(
            classify(&CandidateItem::link("http://free-malware-site.com")),
            ThreatLevel::High
        );
        assert_eq!(
            classify(&CandidateItem::link("https://PHISH.example.com/login")),
            ThreatLevel::High
        );
    }

    #[test]
    fn plain_links_are_low_risk() {
        assert_eq!(
            classify(&CandidateItem::link("https://example.org/docs")),
            ThreatLevel::Low
        );
    }

    #[test]
    fn invalid_phone_numbers_are_medium_risk() {
        assert_eq!(classify(&CandidateItem::phone("abc")), ThreatLevel::Medium);
        // Nine digits: one short of the valid range.
        assert_eq!(
            classify(&CandidateItem::phone("123456789")),
            ThreatLevel::Medium
        );
        assert_eq!(
            classify(&CandidateItem::phone("+44 7911 123456")),
            ThreatLevel::Medium
        );
    }

    #[test]
    fn risky_prefixes_are_checked_on_the_digit_string() {
        assert_eq!(
            classify(&CandidateItem::phone("+1234567890")),
            ThreatLevel::High
        );
        assert_eq!(
            classify(&CandidateItem::phone("0001234567")),
            ThreatLevel::High
        );
        assert_eq!(
            classify(&CandidateItem::phone("9998887776665")),
            ThreatLevel::High
        );
    }

    #[test]
    fn valid_phone_without_risky_prefix_is_low_risk() {
        assert_eq!(
            classify(&CandidateItem::phone("+447911123456")),
            ThreatLevel::Low
        );
    }

    #[test]
    fn pending_rejects_unaccepted_upload_extensions() {
        let mut pending = PendingItems::new();
        assert!(!pending.add_file("movie.mp4"));
        assert!(!pending.add_file("README"));
        assert!(pending.add_file("report.pdf"));
        assert!(pending.add_file("dropper.exe"));
        assert_eq!(pending.files(), ["report.pdf", "dropper.exe"]);
    }

    #[test]
    fn pending_ignores_blank_links_and_phones() {
        let mut pending = PendingItems::new();
        assert!(!pending.add_link("   "));
        assert!(!pending.add_phone(""));
        assert!(pending.add_link("  https://example.com  "));
        assert!(pending.add_phone(" +447911123456 "));
        assert_eq!(pending.links(), ["https://example.com"]);
        assert_eq!(pending.phones(), ["+447911123456"]);
    }

    #[test]
    fn run_scan_rejects_an_empty_queue() {
        let mut session = ScanSession::new();
        let pending = PendingItems::new();
        assert!(matches!(
            session.run_scan(&pending),
            Err(ScopeError::NoInput)
        ));
    }

    #[test]
    fn run_scan_orders_files_then_links_then_phones() {
        let mut session = ScanSession::new();
        let mut pending = PendingItems::new();
        pending.add_phone("+447911123456");
        pending.add_link("https://example.com");
        pending.add_file("notes.txt");
        pending.add_file("setup.exe");

        let results = session.run_scan(&pending).expect("scan should succeed");
        let labels: Vec<_> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "notes.txt",
                "setup.exe",
                "https://example.com",
                "+447911123456"
            ]
        );
        assert_eq!(results.len(), pending.len());
    }

    #[test]
    fn run_scan_assigns_unique_ids_and_monotonic_stamps() {
        let mut session = ScanSession::new();
        let mut pending = PendingItems::new();
        for i in 0..5 {
            pending.add_link(&format!("https://example.com/{i}"));
        }
        let first = session.run_scan(&pending).expect("first scan");
        let second = session.run_scan(&pending).expect("second scan");

        let mut ids: Vec<_> = first
            .iter()
            .chain(second.iter())
            .map(|r| r.id.clone())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);

        let stamps: Vec<_> = first
            .iter()
            .chain(second.iter())
            .map(|r| r.scanned_at)
            .collect();
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn run_scan_leaves_pending_buffers_untouched() {
        let mut session = ScanSession::new();
        let mut pending = PendingItems::new();
        pending.add_link("https://example.com");
        session.run_scan(&pending).expect("scan should succeed");
        assert!(!pending.is_empty());
    }
}
