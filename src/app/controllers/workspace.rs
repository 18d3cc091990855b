//! Document lifecycle: new, open, save, close and exit.
//!
//! Everything here is toolkit-free. Modal questions go through [`Prompter`],
//! so the whole close protocol can be driven from tests.

use std::path::Path;

use super::prompt::{CloseChoice, Prompter};
use super::tabs::TabManager;
use crate::app::domain::{AppSettings, EditingSession, SessionId};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::file_io;
use crate::app::services::recent::{RecentDocuments, RecentDocumentsStore};
use crate::app::services::settings_store::SettingsStore;

/// Which page fills the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Editor,
    About,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new tab was created.
    Opened(SessionId),
    /// The file was already open; its tab was activated.
    Activated(SessionId),
}

impl OpenOutcome {
    pub fn id(&self) -> SessionId {
        match *self {
            Self::Opened(id) | Self::Activated(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    Kept,
}

pub struct Workspace {
    tabs: TabManager,
    recent: RecentDocuments,
    settings: AppSettings,
    screen: Screen,
}

impl Workspace {
    pub fn new(recent: RecentDocuments, settings: AppSettings) -> Self {
        Self {
            tabs: TabManager::new(),
            recent,
            settings,
            screen: Screen::Welcome,
        }
    }

    pub fn load(recent_store: &RecentDocumentsStore, settings_store: &SettingsStore) -> Self {
        Self::new(recent_store.load(), settings_store.load())
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabManager {
        &mut self.tabs
    }

    pub fn recent(&self) -> &RecentDocuments {
        &self.recent
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn show(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn session(&self, id: SessionId) -> Result<&EditingSession> {
        self.tabs.get(id).ok_or(AppError::UnknownSession(id))
    }

    pub fn session_mut(&mut self, id: SessionId) -> Result<&mut EditingSession> {
        self.tabs.get_mut(id).ok_or(AppError::UnknownSession(id))
    }

    pub fn new_document(&mut self) -> SessionId {
        let id = self.tabs.add_untitled();
        self.screen = Screen::Editor;
        tracing::debug!(id = id.0, "New untitled document");
        id
    }

    /// Open `path` in a new tab, or activate the tab that already shows it.
    ///
    /// A read failure leaves the tab set and the recent list untouched.
    pub fn open_path(&mut self, path: &Path) -> Result<OpenOutcome> {
        let path = file_io::absolute(path);

        if let Some(id) = self.tabs.find_by_path(&path) {
            self.tabs.set_active(id);
            self.screen = Screen::Editor;
            return Ok(OpenOutcome::Activated(id));
        }

        let text = file_io::read_document(&path)?;
        let id = self.tabs.add_from_file(path.clone(), text);
        self.remember(&path);
        self.screen = Screen::Editor;
        tracing::info!(path = %path.display(), "Opened document");
        Ok(OpenOutcome::Opened(id))
    }

    /// Open an entry from the home screen list. Entries whose file is gone
    /// are dropped from the list.
    pub fn open_recent(&mut self, path: &Path) -> Result<OpenOutcome> {
        if !path.exists() {
            self.recent.remove(path);
            tracing::warn!(path = %path.display(), "Recent document no longer exists");
            return Err(AppError::NotFound(path.to_path_buf()));
        }
        self.open_path(path)
    }

    /// Write a bound session back to its file. Untitled sessions go
    /// through [`Workspace::save_as`].
    pub fn save(&mut self, id: SessionId, prompter: &mut dyn Prompter) -> Result<SaveOutcome> {
        let session = self.session(id)?;
        let Some(path) = session.path().map(Path::to_path_buf) else {
            return self.save_as(id, prompter);
        };

        file_io::write_document(&path, session.text())?;
        self.session_mut(id)?.mark_saved();
        tracing::info!(path = %path.display(), "Saved document");
        Ok(SaveOutcome::Saved)
    }

    pub fn save_as(&mut self, id: SessionId, prompter: &mut dyn Prompter) -> Result<SaveOutcome> {
        let name = self.session(id)?.display_name().to_string();
        match prompter.choose_save_path(&name) {
            Some(path) => {
                self.save_to(id, &path)?;
                Ok(SaveOutcome::Saved)
            }
            None => Ok(SaveOutcome::Cancelled),
        }
    }

    /// Write the session to `path` and rebind it there. On failure the
    /// session keeps its old identity.
    pub fn save_to(&mut self, id: SessionId, path: &Path) -> Result<()> {
        let path = file_io::absolute(path);
        file_io::write_document(&path, self.session(id)?.text())?;
        self.session_mut(id)?.bind(path.clone());
        self.remember(&path);
        tracing::info!(path = %path.display(), "Saved document as");
        Ok(())
    }

    /// Close a tab, asking first unless its buffer is empty.
    ///
    /// `Save` that ends in a cancelled dialog or a failed write keeps the tab.
    pub fn close(&mut self, id: SessionId, prompter: &mut dyn Prompter) -> Result<CloseOutcome> {
        let session = self.session(id)?;
        if !session.is_empty() {
            match prompter.confirm_close(session.display_name()) {
                CloseChoice::Save => {
                    if self.save(id, prompter)? == SaveOutcome::Cancelled {
                        return Ok(CloseOutcome::Kept);
                    }
                }
                CloseChoice::DontSave => {}
                CloseChoice::Cancel => return Ok(CloseOutcome::Kept),
            }
        }

        self.tabs.remove(id);
        if self.tabs.is_empty() {
            self.screen = Screen::Welcome;
        }
        Ok(CloseOutcome::Closed)
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.settings.toggle_dark_mode()
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.settings.dark_mode = enabled;
    }

    /// Write recent documents and settings. Failures are logged, never raised,
    /// so exit always proceeds.
    pub fn persist(&self, recent_store: &RecentDocumentsStore, settings_store: &SettingsStore) {
        if let Err(e) = recent_store.save(&self.recent) {
            tracing::error!(path = %recent_store.path().display(), "Failed to save recent documents: {}", e);
        }
        if let Err(e) = settings_store.save(&self.settings) {
            tracing::error!(path = %settings_store.path().display(), "Failed to save settings: {}", e);
        }
    }

    fn remember(&mut self, path: &Path) {
        match file_io::describe(path) {
            Ok(record) => self.recent.record(record),
            Err(e) => tracing::warn!(path = %path.display(), "Could not stat file for recent list: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Default)]
    struct ScriptedPrompter {
        close_answers: VecDeque<CloseChoice>,
        save_paths: VecDeque<Option<PathBuf>>,
        asked_close: Vec<String>,
        asked_save: usize,
    }

    impl ScriptedPrompter {
        fn answering(close: &[CloseChoice], paths: Vec<Option<PathBuf>>) -> Self {
            Self {
                close_answers: close.iter().copied().collect(),
                save_paths: paths.into(),
                ..Default::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm_close(&mut self, display_name: &str) -> CloseChoice {
            self.asked_close.push(display_name.to_string());
            self.close_answers.pop_front().expect("unexpected close prompt")
        }

        fn choose_save_path(&mut self, _display_name: &str) -> Option<PathBuf> {
            self.asked_save += 1;
            self.save_paths.pop_front().expect("unexpected save dialog")
        }

        fn show_error(&mut self, _title: &str, _message: &str) {}

        fn show_notice(&mut self, _title: &str, _message: &str) {}
    }

    fn workspace() -> Workspace {
        Workspace::new(RecentDocuments::new(), AppSettings::default())
    }

    fn write_file(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_starts_on_welcome_screen() {
        let ws = workspace();
        assert_eq!(ws.screen(), Screen::Welcome);
        assert!(ws.tabs().is_empty());
    }

    #[test]
    fn test_new_document_switches_to_editor() {
        let mut ws = workspace();
        let id = ws.new_document();
        assert_eq!(ws.screen(), Screen::Editor);
        assert_eq!(ws.session(id).unwrap().display_name(), "Untitled 1");
    }

    #[test]
    fn test_open_same_path_twice_activates_existing_tab() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", "hello");
        let mut ws = workspace();

        let first = ws.open_path(&path).unwrap();
        ws.new_document();
        let second = ws.open_path(&path).unwrap();

        assert!(matches!(first, OpenOutcome::Opened(_)));
        assert_eq!(second, OpenOutcome::Activated(first.id()));
        assert_eq!(ws.tabs().count(), 2);
        assert_eq!(ws.tabs().active_id(), Some(first.id()));
    }

    #[test]
    fn test_open_records_recent_document() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", "hello");
        let mut ws = workspace();

        let id = ws.open_path(&path).unwrap().id();

        let session = ws.session(id).unwrap();
        assert_eq!(session.text(), "hello");
        assert_eq!(session.display_name(), "notes.txt");
        assert!(!session.is_modified());
        assert_eq!(ws.recent().first().unwrap().file_name(), "notes.txt");
    }

    #[test]
    fn test_open_missing_file_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace();

        let err = ws.open_path(&dir.path().join("missing.txt")).unwrap_err();

        assert!(matches!(err, AppError::Open { .. }));
        assert!(ws.tabs().is_empty());
        assert!(ws.recent().is_empty());
        assert_eq!(ws.screen(), Screen::Welcome);
    }

    #[test]
    fn test_open_recent_drops_stale_entry() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "gone.txt", "x");
        let mut ws = workspace();
        ws.open_path(&path).unwrap();
        let id = ws.tabs().active_id().unwrap();
        ws.close(id, &mut ScriptedPrompter::answering(&[CloseChoice::DontSave], vec![])).unwrap();
        fs::remove_file(&path).unwrap();

        let err = ws.open_recent(&path).unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.title(), "File Not Found");
        assert!(ws.recent().is_empty());
    }

    #[test]
    fn test_close_empty_buffer_never_prompts() {
        let mut ws = workspace();
        let id = ws.new_document();
        let mut prompter = ScriptedPrompter::default();

        let outcome = ws.close(id, &mut prompter).unwrap();

        assert_eq!(outcome, CloseOutcome::Closed);
        assert!(prompter.asked_close.is_empty());
        assert_eq!(ws.screen(), Screen::Welcome);
    }

    #[test]
    fn test_close_cancel_keeps_tab() {
        let mut ws = workspace();
        let id = ws.new_document();
        ws.session_mut(id).unwrap().set_text("draft");
        let mut prompter = ScriptedPrompter::answering(&[CloseChoice::Cancel], vec![]);

        let outcome = ws.close(id, &mut prompter).unwrap();

        assert_eq!(outcome, CloseOutcome::Kept);
        assert_eq!(prompter.asked_close, vec!["Untitled 1".to_string()]);
        assert_eq!(ws.session(id).unwrap().text(), "draft");
    }

    #[test]
    fn test_close_dont_save_discards_changes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "keep.txt", "original");
        let mut ws = workspace();
        let id = ws.open_path(&path).unwrap().id();
        ws.session_mut(id).unwrap().set_text("edited");

        let mut prompter = ScriptedPrompter::answering(&[CloseChoice::DontSave], vec![]);
        let outcome = ws.close(id, &mut prompter).unwrap();

        assert_eq!(outcome, CloseOutcome::Closed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(ws.tabs().is_empty());
    }

    #[test]
    fn test_close_save_bound_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "doc.txt", "v1");
        let mut ws = workspace();
        let id = ws.open_path(&path).unwrap().id();
        ws.session_mut(id).unwrap().set_text("v2");

        let mut prompter = ScriptedPrompter::answering(&[CloseChoice::Save], vec![]);
        let outcome = ws.close(id, &mut prompter).unwrap();

        assert_eq!(outcome, CloseOutcome::Closed);
        assert_eq!(prompter.asked_save, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn test_close_save_untitled_cancelled_dialog_keeps_tab() {
        let mut ws = workspace();
        let id = ws.new_document();
        ws.session_mut(id).unwrap().set_text("draft");

        let mut prompter = ScriptedPrompter::answering(&[CloseChoice::Save], vec![None]);
        let outcome = ws.close(id, &mut prompter).unwrap();

        assert_eq!(outcome, CloseOutcome::Kept);
        assert!(ws.session(id).unwrap().is_untitled());
    }

    #[test]
    fn test_close_save_untitled_writes_and_closes() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("saved.txt");
        let mut ws = workspace();
        let id = ws.new_document();
        ws.session_mut(id).unwrap().set_text("draft");

        let mut prompter = ScriptedPrompter::answering(&[CloseChoice::Save], vec![Some(target.clone())]);
        let outcome = ws.close(id, &mut prompter).unwrap();

        assert_eq!(outcome, CloseOutcome::Closed);
        assert_eq!(fs::read_to_string(&target).unwrap(), "draft");
        assert_eq!(ws.recent().first().unwrap().file_name(), "saved.txt");
    }

    #[test]
    fn test_close_save_failure_keeps_tab() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let path = sub.join("doc.txt");
        fs::write(&path, "v1").unwrap();

        let mut ws = workspace();
        let id = ws.open_path(&path).unwrap().id();
        ws.session_mut(id).unwrap().set_text("v2");
        fs::remove_dir_all(&sub).unwrap();

        let mut prompter = ScriptedPrompter::answering(&[CloseChoice::Save], vec![]);
        let err = ws.close(id, &mut prompter).unwrap_err();

        assert!(matches!(err, AppError::Save { .. }));
        assert!(ws.session(id).unwrap().is_modified());
        assert_eq!(ws.tabs().count(), 1);
    }

    #[test]
    fn test_save_as_binds_untitled_session() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("doc.txt");
        let mut ws = workspace();
        let id = ws.new_document();
        ws.session_mut(id).unwrap().set_text("hello");

        let mut prompter = ScriptedPrompter::answering(&[], vec![Some(target.clone())]);
        let outcome = ws.save(id, &mut prompter).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved);
        let session = ws.session(id).unwrap();
        assert!(!session.is_untitled());
        assert!(!session.is_modified());
        assert_eq!(session.display_name(), "doc.txt");
        assert_eq!(session.path(), Some(file_io::absolute(&target).as_path()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
        assert_eq!(ws.recent().first().unwrap().file_name(), "doc.txt");
    }

    #[test]
    fn test_save_as_cancelled_changes_nothing() {
        let mut ws = workspace();
        let id = ws.new_document();
        ws.session_mut(id).unwrap().set_text("hello");

        let mut prompter = ScriptedPrompter::answering(&[], vec![None]);
        let outcome = ws.save_as(id, &mut prompter).unwrap();

        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert!(ws.session(id).unwrap().is_untitled());
        assert!(ws.recent().is_empty());
    }

    #[test]
    fn test_save_as_write_failure_keeps_identity() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("no-such-dir").join("doc.txt");
        let mut ws = workspace();
        let id = ws.new_document();
        ws.session_mut(id).unwrap().set_text("hello");

        let err = ws.save_to(id, &target).unwrap_err();

        assert!(matches!(err, AppError::Save { .. }));
        let session = ws.session(id).unwrap();
        assert!(session.is_untitled());
        assert_eq!(session.display_name(), "Untitled 1");
    }

    #[test]
    fn test_save_bound_does_not_prompt() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "doc.txt", "v1");
        let mut ws = workspace();
        let id = ws.open_path(&path).unwrap().id();
        ws.session_mut(id).unwrap().set_text("v2");

        let mut prompter = ScriptedPrompter::default();
        ws.save(id, &mut prompter).unwrap();

        assert_eq!(prompter.asked_save, 0);
        assert!(!ws.session(id).unwrap().is_modified());
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn test_closing_one_of_two_tabs_stays_in_editor() {
        let mut ws = workspace();
        let a = ws.new_document();
        ws.new_document();

        ws.close(a, &mut ScriptedPrompter::default()).unwrap();

        assert_eq!(ws.screen(), Screen::Editor);
        assert_eq!(ws.tabs().count(), 1);
    }

    #[test]
    fn test_unknown_session_is_an_error() {
        let mut ws = workspace();
        let err = ws.close(SessionId(42), &mut ScriptedPrompter::default()).unwrap_err();
        assert!(matches!(err, AppError::UnknownSession(SessionId(42))));
    }

    #[test]
    fn test_persist_round_trips_through_stores() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.txt", "a");
        let recent_store = RecentDocumentsStore::new(dir.path().join("cfg").join("recent_files.json"));
        let settings_store = SettingsStore::new(dir.path().join("cfg").join("settings.json"));

        let mut ws = workspace();
        ws.open_path(&path).unwrap();
        ws.toggle_dark_mode();
        ws.persist(&recent_store, &settings_store);

        let reloaded = Workspace::load(&recent_store, &settings_store);
        assert!(reloaded.settings().dark_mode);
        assert_eq!(reloaded.recent().len(), 1);
        assert_eq!(reloaded.recent().first().unwrap().file_name(), "a.txt");
    }

    #[test]
    fn test_persist_failure_does_not_panic() {
        let dir = TempDir::new().unwrap();
        let blocker = write_file(&dir, "file", "");
        let recent_store = RecentDocumentsStore::new(blocker.join("recent_files.json"));
        let settings_store = SettingsStore::new(blocker.join("settings.json"));

        workspace().persist(&recent_store, &settings_store);
    }
}
