use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::app::domain::record::{DocumentRecord, format_timestamp};
use crate::app::infrastructure::error::{AppError, Result};

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Make a path absolute against the current directory without touching symlinks.
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Read a whole file as UTF-8. Invalid sequences become U+FFFD rather than
/// failing the open.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| AppError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text.as_bytes()).map_err(|source| AppError::Save {
        path: path.to_path_buf(),
        source,
    })
}

pub fn modified_time(path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}

/// Build the recent-list record for a file from its current metadata.
pub fn describe(path: &Path) -> io::Result<DocumentRecord> {
    let path = absolute(path);
    let modified = modified_time(&path)?;
    Ok(DocumentRecord::new(
        extract_filename(&path),
        path,
        format_timestamp(modified),
    ))
}
