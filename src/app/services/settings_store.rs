use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::AppSettings;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::paths;

/// Reads and writes `AppSettings` as pretty-printed JSON.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(paths::settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(&self) -> AppSettings {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), "failed to parse settings: {}. Using defaults.", e);
                    AppSettings::default()
                }
            },
            Err(e) => {
                // First run
                tracing::debug!(path = %self.path.display(), "no settings file: {}", e);
                AppSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fresh_environment_defaults_to_light() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let settings = store.load();
        assert!(!settings.dark_mode);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "\u{0}\u{1}garbage").unwrap();
        assert_eq!(SettingsStore::new(path).load(), AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("config/settings.json"));
        store.save(&AppSettings { dark_mode: true }).unwrap();
        assert!(store.load().dark_mode);

        store.save(&AppSettings { dark_mode: false }).unwrap();
        assert!(!store.load().dark_mode);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().to_path_buf());
        assert!(store.save(&AppSettings::default()).is_err());
    }
}
