use log::debug;

/// Upload extensions the analyzer accepts. Files outside this set are
/// dropped at ingestion time rather than surfaced as an error.
pub const ACCEPTED_UPLOAD_EXTENSIONS: &[&str] =
    &["txt", "pdf", "log", "doc", "exe", "js", "bat", "scr"];

/// Candidate items queued by the user ahead of a scan. Buffers keep
/// insertion order; a successful scan commit clears all three.
#[derive(Debug, Default)]
pub struct PendingItems {
    files: Vec<String>,
    links: Vec<String>,
    phones: Vec<String>,
}

impl PendingItems {
    pub fn new() -> Self {
        PendingItems::default()
    }

    /// Queue a selected file by name. Names with no accepted extension are
    /// skipped silently; returns whether the file was queued.
    pub fn add_file(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let accepted = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .map_or(false, |ext| {
                ACCEPTED_UPLOAD_EXTENSIONS.contains(&ext.as_str())
            });
        if !accepted {
            debug!("skipping upload with unaccepted extension: {}", name);
            return false;
        }
        self.files.push(name.to_string());
        true
    }

    pub fn add_link(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }
        self.links.push(url.to_string());
        true
    }

    pub fn add_phone(&mut self, raw: &str) -> bool {
        let raw = raw.trim();
        if raw.is_empty() {
            return false;
        }
        self.phones.push(raw.to_string());
        true
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.links.is_empty() && self.phones.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.links.len() + self.phones.len()
    }

    /// Drop all queued items. Called once a scan commit has landed so a
    /// retry never double-scans.
    pub fn clear(&mut self) {
        self.files.clear();
        self.links.clear();
        self.phones.clear();
    }
}
