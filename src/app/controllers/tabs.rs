use std::path::{Path, PathBuf};

use crate::app::domain::{EditingSession, SessionId};

/// Open sessions in tab order, plus the active tab and the untitled counter.
pub struct TabManager {
    sessions: Vec<EditingSession>,
    active_id: Option<SessionId>,
    next_id: u64,
    untitled_counter: u32,
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            active_id: None,
            next_id: 1,
            untitled_counter: 0,
        }
    }

    fn next_session_id(&mut self) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The counter only ever grows, so closed "Untitled N" names are not reused.
    pub fn add_untitled(&mut self) -> SessionId {
        self.untitled_counter += 1;
        let id = self.next_session_id();
        self.sessions.push(EditingSession::new_untitled(id, self.untitled_counter));
        self.active_id = Some(id);
        id
    }

    pub fn add_from_file(&mut self, path: PathBuf, text: String) -> SessionId {
        let id = self.next_session_id();
        self.sessions.push(EditingSession::new_bound(id, path, text));
        self.active_id = Some(id);
        id
    }

    pub fn active(&self) -> Option<&EditingSession> {
        let active_id = self.active_id?;
        self.get(active_id)
    }

    pub fn active_mut(&mut self) -> Option<&mut EditingSession> {
        let active_id = self.active_id?;
        self.get_mut(active_id)
    }

    pub fn active_id(&self) -> Option<SessionId> {
        self.active_id
    }

    pub fn set_active(&mut self, id: SessionId) {
        if self.sessions.iter().any(|s| s.id() == id) {
            self.active_id = Some(id);
        }
    }

    /// Remove a session by id and activate its nearest neighbour.
    pub fn remove(&mut self, id: SessionId) -> Option<EditingSession> {
        let idx = self.sessions.iter().position(|s| s.id() == id)?;
        let session = self.sessions.remove(idx);

        if self.active_id == Some(id) {
            self.active_id = if self.sessions.is_empty() {
                None
            } else {
                let new_idx = idx.min(self.sessions.len() - 1);
                Some(self.sessions[new_idx].id())
            };
        }

        Some(session)
    }

    pub fn sessions(&self) -> &[EditingSession] {
        &self.sessions
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Find a session by its exact backing path
    pub fn find_by_path(&self, path: &Path) -> Option<SessionId> {
        self.sessions
            .iter()
            .find(|s| s.path() == Some(path))
            .map(|s| s.id())
    }

    pub fn get(&self, id: SessionId) -> Option<&EditingSession> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut EditingSession> {
        self.sessions.iter_mut().find(|s| s.id() == id)
    }
}
