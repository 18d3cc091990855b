use std::path::PathBuf;

const APP_DIR: &str = "modern-text-editor";

/// Per-user configuration directory, e.g. `~/.config/modern-text-editor`.
pub fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn recent_files_path() -> PathBuf {
    config_dir().join("recent_files.json")
}
