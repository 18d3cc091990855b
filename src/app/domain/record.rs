use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Display format for modification times, e.g. `Mar 04, 2025 14:07`.
pub const TIMESTAMP_FORMAT: &str = "%b %d, %Y %H:%M";

/// One row of the recent-documents list.
///
/// Records are immutable once created; identity is the absolute `path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    file_name: String,
    path: PathBuf,
    last_modified: String,
}

impl DocumentRecord {
    pub fn new(file_name: impl Into<String>, path: impl Into<PathBuf>, last_modified: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            path: path.into(),
            last_modified: last_modified.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Timestamp captured when the record was made. Recency filtering
    /// re-reads the file instead of trusting this string.
    pub fn last_modified(&self) -> &str {
        &self.last_modified
    }
}

impl PartialEq for DocumentRecord {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for DocumentRecord {}

impl Hash for DocumentRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

/// Format a filesystem timestamp in local time.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(TIMESTAMP_FORMAT).to_string()
}
