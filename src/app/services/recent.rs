use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local, Months};

use super::file_io::modified_time;
use crate::app::domain::DocumentRecord;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::paths;

pub const MAX_RECENT_DOCUMENTS: usize = 20;

/// Time windows offered by the home screen's filter drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecencyBucket {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
}

impl RecencyBucket {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
        }
    }

    pub fn all() -> &'static [RecencyBucket] {
        &[Self::All, Self::Today, Self::ThisWeek, Self::ThisMonth]
    }

    pub fn from_index(index: usize) -> RecencyBucket {
        Self::all().get(index).copied().unwrap_or_default()
    }

    /// Whether a file modified at `modified` falls in this bucket as seen at `now`.
    pub fn contains(&self, modified: DateTime<Local>, now: DateTime<Local>) -> bool {
        match self {
            Self::All => true,
            Self::Today => modified.date_naive() == now.date_naive(),
            Self::ThisWeek => modified > now - Duration::days(7),
            Self::ThisMonth => match now.checked_sub_months(Months::new(1)) {
                Some(month_ago) => modified > month_ago,
                None => true,
            },
        }
    }
}

/// Most-recently-used documents, newest first.
///
/// Paths are unique and the list never holds more than
/// [`MAX_RECENT_DOCUMENTS`] entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentDocuments {
    entries: Vec<DocumentRecord>,
}

impl RecentDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted entries, dropping later duplicates and anything past the cap.
    pub fn from_entries(entries: Vec<DocumentRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut entries: Vec<DocumentRecord> = entries
            .into_iter()
            .filter(|rec| seen.insert(rec.path().to_path_buf()))
            .collect();
        entries.truncate(MAX_RECENT_DOCUMENTS);
        Self { entries }
    }

    pub fn entries(&self) -> &[DocumentRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&DocumentRecord> {
        self.entries.first()
    }

    pub fn record_opened(
        &mut self,
        path: impl Into<PathBuf>,
        file_name: impl Into<String>,
        last_modified: impl Into<String>,
    ) {
        self.record(DocumentRecord::new(file_name, path, last_modified));
    }

    /// Dedup, then prepend, then truncate: reopening moves an entry to the front.
    pub fn record(&mut self, record: DocumentRecord) {
        self.entries.retain(|rec| rec.path() != record.path());
        self.entries.insert(0, record);
        self.entries.truncate(MAX_RECENT_DOCUMENTS);
    }

    /// Drop the entry for `path`. Returns whether one was present.
    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|rec| rec.path() != path);
        self.entries.len() != before
    }

    /// Case-insensitive substring match on file name or path. An empty
    /// query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&DocumentRecord> {
        self.entries.iter().filter(|rec| matches_query(rec, query)).collect()
    }

    pub fn filter_by_recency(&self, bucket: RecencyBucket) -> Vec<&DocumentRecord> {
        self.filter_by_recency_at(bucket, Local::now())
    }

    /// Bucket membership is decided on the file's current mtime, not on the
    /// stored display string. Files that cannot be stat'd only show under `All`.
    pub fn filter_by_recency_at(&self, bucket: RecencyBucket, now: DateTime<Local>) -> Vec<&DocumentRecord> {
        self.entries
            .iter()
            .filter(|rec| matches_bucket(rec, bucket, now))
            .collect()
    }

    /// Rows for the home screen: search text and time window combined.
    pub fn visible(&self, query: &str, bucket: RecencyBucket) -> Vec<&DocumentRecord> {
        let now = Local::now();
        self.entries
            .iter()
            .filter(|rec| matches_query(rec, query) && matches_bucket(rec, bucket, now))
            .collect()
    }
}

fn matches_query(record: &DocumentRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.file_name().to_lowercase().contains(&needle)
        || record.path().to_string_lossy().to_lowercase().contains(&needle)
}

fn matches_bucket(record: &DocumentRecord, bucket: RecencyBucket, now: DateTime<Local>) -> bool {
    if bucket == RecencyBucket::All {
        return true;
    }
    match modified_time(record.path()) {
        Ok(time) => bucket.contains(DateTime::<Local>::from(time), now),
        Err(_) => false,
    }
}

/// Reads and writes the recent list as a JSON array.
pub struct RecentDocumentsStore {
    path: PathBuf,
}

impl RecentDocumentsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(paths::recent_files_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing or corrupt file yields an empty list.
    pub fn load(&self) -> RecentDocuments {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "no recent files loaded: {}", e);
                return RecentDocuments::new();
            }
        };

        match serde_json::from_str::<Vec<DocumentRecord>>(&contents) {
            Ok(entries) => {
                let recent = RecentDocuments::from_entries(entries);
                tracing::debug!(count = recent.len(), "loaded recent files");
                recent
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "failed to parse recent files: {}. Starting empty.", e);
                RecentDocuments::new()
            }
        }
    }

    pub fn save(&self, recent: &RecentDocuments) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(recent.entries())?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs::File;
    use std::time::SystemTime;
    use tempfile::tempdir;

    fn record(n: usize) -> DocumentRecord {
        DocumentRecord::new(
            format!("file{n}.txt"),
            format!("/docs/file{n}.txt"),
            "Jan 01, 2025 10:00",
        )
    }

    fn paths(list: &[&DocumentRecord]) -> Vec<PathBuf> {
        list.iter().map(|r| r.path().to_path_buf()).collect()
    }

    fn touch(path: &Path, when: DateTime<Local>) {
        let file = File::create(path).unwrap();
        file.set_modified(SystemTime::from(when)).unwrap();
    }

    #[test]
    fn test_record_opened_twice_keeps_one_entry_at_front() {
        let mut recent = RecentDocuments::new();
        recent.record(record(1));
        recent.record(record(2));
        recent.record_opened("/docs/file1.txt", "file1.txt", "Feb 01, 2025 09:00");
        recent.record_opened("/docs/file1.txt", "file1.txt", "Feb 01, 2025 09:05");

        assert_eq!(recent.len(), 2);
        assert_eq!(recent.entries()[0].path(), Path::new("/docs/file1.txt"));
        assert_eq!(recent.entries()[0].last_modified(), "Feb 01, 2025 09:05");
        assert_eq!(recent.entries()[1].path(), Path::new("/docs/file2.txt"));
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut recent = RecentDocuments::new();
        for n in 0..25 {
            recent.record(record(n));
        }
        assert_eq!(recent.len(), MAX_RECENT_DOCUMENTS);
        assert_eq!(recent.entries()[0].path(), Path::new("/docs/file24.txt"));
        assert_eq!(recent.entries()[19].path(), Path::new("/docs/file5.txt"));
        assert!(!recent.entries().iter().any(|r| r.path() == Path::new("/docs/file4.txt")));
    }

    #[test]
    fn test_reopen_at_cap_does_not_drop_anything() {
        let mut recent = RecentDocuments::new();
        for n in 0..20 {
            recent.record(record(n));
        }
        recent.record(record(0));
        assert_eq!(recent.len(), 20);
        assert_eq!(recent.entries()[0].path(), Path::new("/docs/file0.txt"));
        assert_eq!(recent.entries()[19].path(), Path::new("/docs/file1.txt"));
    }

    #[test]
    fn test_remove() {
        let mut recent = RecentDocuments::from_entries(vec![record(1), record(2)]);
        assert!(recent.remove(Path::new("/docs/file1.txt")));
        assert!(!recent.remove(Path::new("/docs/file1.txt")));
        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn test_from_entries_normalises() {
        let mut entries: Vec<_> = (0..30).map(record).collect();
        entries.insert(1, record(0));
        let recent = RecentDocuments::from_entries(entries);
        assert_eq!(recent.len(), 20);
        assert_eq!(recent.entries()[1].path(), Path::new("/docs/file1.txt"));
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let recent = RecentDocuments::from_entries(vec![record(3), record(1), record(2)]);
        let all: Vec<DocumentRecord> = recent.filter("").into_iter().cloned().collect();
        assert_eq!(all, recent.entries());
    }

    #[test]
    fn test_filter_matches_name_or_path_case_insensitively() {
        let recent = RecentDocuments::from_entries(vec![
            DocumentRecord::new("Notes.md", "/home/me/Notes.md", ""),
            DocumentRecord::new("todo.txt", "/home/me/Projects/todo.txt", ""),
            DocumentRecord::new("main.rs", "/src/main.rs", ""),
        ]);

        assert_eq!(paths(&recent.filter("NOTES")), vec![PathBuf::from("/home/me/Notes.md")]);
        assert_eq!(
            paths(&recent.filter("projects")),
            vec![PathBuf::from("/home/me/Projects/todo.txt")]
        );
        assert_eq!(recent.filter("home").len(), 2);
        assert!(recent.filter("zzz").is_empty());
    }

    #[test]
    fn test_bucket_windows() {
        let now = Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let earlier_today = Local.with_ymd_and_hms(2025, 6, 15, 0, 30, 0).unwrap();
        let yesterday = Local.with_ymd_and_hms(2025, 6, 14, 23, 0, 0).unwrap();
        let ten_days = now - Duration::days(10);
        let forty_days = now - Duration::days(40);

        assert!(RecencyBucket::Today.contains(earlier_today, now));
        assert!(!RecencyBucket::Today.contains(yesterday, now));

        assert!(RecencyBucket::ThisWeek.contains(yesterday, now));
        assert!(!RecencyBucket::ThisWeek.contains(ten_days, now));

        assert!(RecencyBucket::ThisMonth.contains(ten_days, now));
        assert!(!RecencyBucket::ThisMonth.contains(forty_days, now));

        assert!(RecencyBucket::All.contains(forty_days, now));
    }

    #[test]
    fn test_filter_by_recency_reads_disk_mtime() {
        let dir = tempdir().unwrap();
        let now = Local::now();
        let fresh = dir.path().join("fresh.txt");
        let old = dir.path().join("old.txt");
        touch(&fresh, now);
        touch(&old, now - Duration::days(60));
        let missing = dir.path().join("missing.txt");

        let mut recent = RecentDocuments::new();
        // The stored display string deliberately disagrees with the disk.
        recent.record_opened(&missing, "missing.txt", "Jan 01, 2000 00:00");
        recent.record_opened(&old, "old.txt", "Jan 01, 2100 00:00");
        recent.record_opened(&fresh, "fresh.txt", "Jan 01, 2000 00:00");

        assert_eq!(paths(&recent.filter_by_recency_at(RecencyBucket::Today, now)), vec![fresh.clone()]);
        assert_eq!(paths(&recent.filter_by_recency_at(RecencyBucket::ThisWeek, now)), vec![fresh.clone()]);
        assert_eq!(paths(&recent.filter_by_recency_at(RecencyBucket::ThisMonth, now)), vec![fresh.clone()]);
        assert_eq!(recent.filter_by_recency_at(RecencyBucket::All, now).len(), 3);
    }

    #[test]
    fn test_visible_combines_query_and_bucket() {
        let dir = tempdir().unwrap();
        let now = Local::now();
        let a = dir.path().join("alpha.txt");
        let b = dir.path().join("beta.txt");
        touch(&a, now);
        touch(&b, now);

        let mut recent = RecentDocuments::new();
        recent.record_opened(&a, "alpha.txt", "");
        recent.record_opened(&b, "beta.txt", "");
        recent.record_opened(dir.path().join("alpha-gone.txt"), "alpha-gone.txt", "");

        assert_eq!(recent.visible("alpha", RecencyBucket::All).len(), 2);
        assert_eq!(paths(&recent.visible("alpha", RecencyBucket::Today)), vec![a]);
    }

    #[test]
    fn test_bucket_from_index() {
        assert_eq!(RecencyBucket::from_index(0), RecencyBucket::All);
        assert_eq!(RecencyBucket::from_index(3), RecencyBucket::ThisMonth);
        assert_eq!(RecencyBucket::from_index(42), RecencyBucket::All);
        assert_eq!(RecencyBucket::ThisWeek.display_name(), "This Week");
    }

    #[test]
    fn test_store_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = RecentDocumentsStore::new(dir.path().join("recent_files.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_store_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recent_files.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(RecentDocumentsStore::new(path).load().is_empty());
    }

    #[test]
    fn test_store_save_and_load() {
        let dir = tempdir().unwrap();
        let store = RecentDocumentsStore::new(dir.path().join("nested/recent_files.json"));
        let mut recent = RecentDocuments::new();
        recent.record(record(1));
        recent.record(record(2));

        store.save(&recent).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries()[0].file_name(), "file2.txt");
        assert_eq!(loaded.entries()[1].last_modified(), "Jan 01, 2025 10:00");
    }

    #[test]
    fn test_store_save_failure_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = RecentDocumentsStore::new(blocker.join("recent_files.json"));
        assert!(store.save(&RecentDocuments::new()).is_err());
    }
}
