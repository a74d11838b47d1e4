// src/mirror/report.rs
// =============================================================================
// A record of what one mirror run did.
//
// The walker fills this in as it goes and hands it back on success. It is
// only used for the final summary (table or --json); nothing in the walk
// reads it back, so it never changes what gets fetched.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::SkipReason;

// One leaf file that was downloaded and written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadedFile {
    /// The URL the file was fetched from
    pub url: String,
    /// The local path it was written to
    pub path: String,
    /// Number of bytes written
    pub bytes: usize,
}

// One href (or anchor) that was ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLink {
    /// The page the href was found on
    pub location: String,
    /// The href itself (None for an anchor with no href)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorReport {
    /// Every page fetched and parsed, in visit order
    pub pages: Vec<String>,
    /// Every leaf download, in download order
    pub files: Vec<DownloadedFile>,
    /// Every reference that was not followed
    pub skipped: Vec<SkippedLink>,
}

impl MirrorReport {
    /// Total bytes written across all downloaded files
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}
