use std::path::{Path, PathBuf};

use super::style::TextStyle;
use crate::app::services::file_io::extract_filename;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

/// Whether a tab is backed by a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionKind {
    /// New document, named `Untitled {number}`.
    Untitled { number: u32 },
    /// Document with a file on disk; named after the file.
    Bound { path: PathBuf },
}

/// One open tab: the in-memory text plus where it lives on disk, if anywhere.
#[derive(Debug, Clone)]
pub struct EditingSession {
    id: SessionId,
    kind: SessionKind,
    text: String,
    display_name: String,
    modified: bool,
    pub style: TextStyle,
}

impl EditingSession {
    pub fn new_untitled(id: SessionId, number: u32) -> Self {
        Self {
            id,
            kind: SessionKind::Untitled { number },
            text: String::new(),
            display_name: format!("Untitled {}", number),
            modified: false,
            style: TextStyle::default(),
        }
    }

    pub fn new_bound(id: SessionId, path: PathBuf, text: String) -> Self {
        let display_name = extract_filename(&path);
        Self {
            id,
            kind: SessionKind::Bound { path },
            text,
            display_name,
            modified: false,
            style: TextStyle::default(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn kind(&self) -> &SessionKind {
        &self.kind
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            SessionKind::Bound { path } => Some(path),
            SessionKind::Untitled { .. } => None,
        }
    }

    pub fn is_untitled(&self) -> bool {
        matches!(self.kind, SessionKind::Untitled { .. })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Empty buffers close without asking.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Edited since the last open or save. Only drives the tab marker.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.modified = true;
        }
    }

    /// Record a successful write of the current text to the bound path.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Transition to `Bound` after a successful "save as".
    pub fn bind(&mut self, path: PathBuf) {
        self.display_name = extract_filename(&path);
        self.kind = SessionKind::Bound { path };
        self.modified = false;
    }
}
