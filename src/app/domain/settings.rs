use serde::{Deserialize, Serialize};

/// Process-wide preferences, loaded at startup and written back on exit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub dark_mode: bool,
}

impl AppSettings {
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
