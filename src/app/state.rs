use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fltk::{
    app::Sender,
    dialog::{self, ColorMode},
    prelude::*,
    text::TextBuffer,
};

use super::controllers::{CloseOutcome, OpenOutcome, Prompter, Screen, Workspace};
use super::domain::{Message, Rgb, SessionId, TextStyle};
use super::infrastructure::error::{AppError, Result};
use super::services::recent::RecentDocumentsStore;
use super::services::settings_store::SettingsStore;
use crate::ui::dialogs::find::show_find_replace_dialog;
use crate::ui::dialogs::font::show_font_dialog;
use crate::ui::file_dialogs::native_open_dialog;
use crate::ui::main_window::{MainWidgets, APP_TITLE};
use crate::ui::menu::{set_menu_checkbox, DARK_MODE_ITEM};
use crate::ui::prompter::FltkPrompter;
use crate::ui::theme::{apply_text_style, apply_theme};

/// Owns the workspace and the widgets, and applies each `Message` to both.
///
/// The text of each tab lives in an FLTK `TextBuffer` while editing; it is
/// copied into the session before anything that reads it (save, close).
pub struct AppState {
    workspace: Workspace,
    widgets: MainWidgets,
    buffers: HashMap<SessionId, TextBuffer>,
    /// Paths of the welcome table rows, in row order.
    visible_recent: Vec<PathBuf>,
    sender: Sender<Message>,
    recent_store: RecentDocumentsStore,
    settings_store: SettingsStore,
    prompter: FltkPrompter,
}

impl AppState {
    pub fn new(
        workspace: Workspace,
        widgets: MainWidgets,
        sender: Sender<Message>,
        recent_store: RecentDocumentsStore,
        settings_store: SettingsStore,
    ) -> Self {
        let mut state = Self {
            workspace,
            widgets,
            buffers: HashMap::new(),
            visible_recent: Vec::new(),
            sender,
            recent_store,
            settings_store,
            prompter: FltkPrompter,
        };
        state.apply_dark_mode();
        state.refresh_recent();
        state.show_screen();
        state
    }

    pub fn show_window(&mut self) {
        self.widgets.wind.show();
    }

    /// Handle one message. Returns `true` if the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileNew => self.file_new(),
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::FileSaveAs => self.file_save_as(),
            Message::TabCloseActive => {
                if let Some(id) = self.workspace.tabs().active_id() {
                    self.close_tab(id);
                }
            }
            Message::GoHome => self.show(Screen::Welcome),
            Message::FileExit | Message::WindowClose => return self.file_exit(),

            Message::TabSwitch(id) => self.switch_to(id),
            Message::TabClose(id) => self.close_tab(id),
            Message::BufferModified(id) => self.buffer_modified(id),

            Message::ShowFindReplace => self.find_replace(),

            Message::ShowFontDialog => self.font_dialog(),
            Message::SetFontFamily(family) => self.edit_active_style(|s| s.set_family(family)),
            Message::SetFontSize(size) => self.edit_active_style(|s| s.set_size(size)),
            Message::ToggleBold => self.edit_active_style(TextStyle::toggle_bold),
            Message::ToggleItalic => self.edit_active_style(TextStyle::toggle_italic),
            Message::PickTextColor => {
                if let Some(rgb) = pick_color("Text Color") {
                    self.edit_active_style(|s| s.set_text_color(rgb));
                }
            }
            Message::PickBackgroundColor => {
                if let Some(rgb) = pick_color("Background Color") {
                    self.edit_active_style(|s| s.set_background_color(rgb));
                }
            }

            Message::ToggleDarkMode => {
                let enabled = self.workspace.toggle_dark_mode();
                tracing::debug!(enabled, "Dark mode toggled");
                self.apply_dark_mode();
            }
            Message::SetDarkMode(enabled) => {
                self.workspace.set_dark_mode(enabled);
                self.apply_dark_mode();
            }

            Message::ShowAbout => self.show(Screen::About),
            Message::ShowSettings => self.show(Screen::Settings),

            Message::RecentFilterChanged => self.refresh_recent(),
            Message::RecentOpen(row) => self.recent_open(row),
        }
        false
    }

    // --- Screens ---

    fn show(&mut self, screen: Screen) {
        self.workspace.show(screen);
        if screen == Screen::Welcome {
            self.refresh_recent();
        }
        self.show_screen();
    }

    fn show_screen(&mut self) {
        let screen = self.workspace.screen();
        let w = &mut self.widgets;
        for (page, visible) in [
            (&mut w.welcome.page, screen == Screen::Welcome),
            (&mut w.editor_page, screen == Screen::Editor),
            (&mut w.about.page, screen == Screen::About),
            (&mut w.settings.page, screen == Screen::Settings),
        ] {
            if visible {
                page.show();
            } else {
                page.hide();
            }
        }
        w.root.layout();
        w.wind.redraw();
        if screen == Screen::Editor {
            let _ = w.text_editor.take_focus();
        }
        self.update_window_title();
    }

    fn update_window_title(&mut self) {
        let title = match (self.workspace.screen(), self.workspace.tabs().active()) {
            (Screen::Editor, Some(session)) => {
                let marker = if session.is_modified() { "*" } else { "" };
                format!("{}{} - {}", marker, session.display_name(), APP_TITLE)
            }
            _ => APP_TITLE.to_string(),
        };
        self.widgets.wind.set_label(&title);
    }

    fn refresh_recent(&mut self) {
        let query = self.widgets.welcome.query();
        let bucket = self.widgets.welcome.bucket();
        let visible = self.workspace.recent().visible(&query, bucket);
        self.visible_recent = visible.iter().map(|r| r.path().to_path_buf()).collect();
        self.widgets.welcome.show_records(&visible);
    }

    // --- Tabs ---

    /// Create the FLTK buffer for a new session. The text is loaded before
    /// the modify callback is attached, so loading does not mark the tab.
    fn attach_buffer(&mut self, id: SessionId, text: &str) {
        let mut buffer = TextBuffer::default();
        buffer.set_text(text);
        let sender = self.sender;
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                sender.send(Message::BufferModified(id));
            }
        });
        self.buffers.insert(id, buffer);
    }

    fn switch_to(&mut self, id: SessionId) {
        self.workspace.tabs_mut().set_active(id);
        if let Some(buffer) = self.buffers.get(&id) {
            self.widgets.text_editor.set_buffer(buffer.clone());
        }
        self.apply_active_style();
        self.rebuild_tab_bar();
        self.update_window_title();
    }

    fn rebuild_tab_bar(&mut self) {
        let tabs = self.workspace.tabs();
        self.widgets.tab_bar.rebuild(tabs.sessions(), tabs.active_id());
    }

    fn buffer_modified(&mut self, id: SessionId) {
        if let Ok(session) = self.workspace.session_mut(id) {
            if !session.is_modified() {
                session.mark_modified();
                self.rebuild_tab_bar();
                self.update_window_title();
            }
        }
    }

    /// Copy the editor text into the session.
    fn sync_text(&mut self, id: SessionId) {
        if let Some(buffer) = self.buffers.get(&id) {
            let text = buffer.text();
            if let Ok(session) = self.workspace.session_mut(id) {
                session.set_text(text);
            }
        }
    }

    fn close_tab(&mut self, id: SessionId) {
        self.sync_text(id);
        match self.workspace.close(id, &mut self.prompter) {
            Ok(CloseOutcome::Closed) => {
                self.buffers.remove(&id);
                tracing::debug!(id = id.0, "Closed tab");
                match self.workspace.tabs().active_id() {
                    Some(active) => self.switch_to(active),
                    None => {
                        self.rebuild_tab_bar();
                        self.refresh_recent();
                        self.show_screen();
                    }
                }
            }
            Ok(CloseOutcome::Kept) => {
                self.rebuild_tab_bar();
                self.update_window_title();
            }
            Err(e) => self.report(&e),
        }
    }

    // --- File operations ---

    fn file_new(&mut self) {
        let id = self.workspace.new_document();
        self.attach_buffer(id, "");
        self.show_screen();
        self.switch_to(id);
    }

    fn file_open(&mut self) {
        if let Some(path) = native_open_dialog() {
            self.open_path(&path);
        }
    }

    /// Open a file in a tab, reporting failures to the user.
    pub fn open_path(&mut self, path: &Path) {
        let result = self.workspace.open_path(path);
        self.finish_open(result);
    }

    fn recent_open(&mut self, row: usize) {
        let Some(path) = self.visible_recent.get(row).cloned() else {
            return;
        };
        let result = self.workspace.open_recent(&path);
        self.finish_open(result);
    }

    fn finish_open(&mut self, result: Result<OpenOutcome>) {
        match result {
            Ok(OpenOutcome::Opened(id)) => {
                let text = self
                    .workspace
                    .session(id)
                    .map(|s| s.text().to_string())
                    .unwrap_or_default();
                self.attach_buffer(id, &text);
                self.show_screen();
                self.switch_to(id);
            }
            Ok(OpenOutcome::Activated(id)) => {
                self.show_screen();
                self.switch_to(id);
            }
            Err(e) => self.report(&e),
        }
        self.refresh_recent();
    }

    fn file_save(&mut self) {
        let Some(id) = self.workspace.tabs().active_id() else {
            return;
        };
        self.sync_text(id);
        if let Err(e) = self.workspace.save(id, &mut self.prompter) {
            self.report(&e);
        }
        self.after_save();
    }

    fn file_save_as(&mut self) {
        let Some(id) = self.workspace.tabs().active_id() else {
            return;
        };
        self.sync_text(id);
        if let Err(e) = self.workspace.save_as(id, &mut self.prompter) {
            self.report(&e);
        }
        self.after_save();
    }

    fn after_save(&mut self) {
        self.rebuild_tab_bar();
        self.update_window_title();
        self.refresh_recent();
    }

    /// Persist state and quit. Open tabs are not prompted for.
    fn file_exit(&mut self) -> bool {
        self.workspace.persist(&self.recent_store, &self.settings_store);
        tracing::info!("Exiting");
        true
    }

    fn report(&mut self, error: &AppError) {
        tracing::warn!("{}", error);
        self.prompter.show_error(error.title(), &error.to_string());
    }

    // --- Edit / Format ---

    fn find_replace(&mut self) {
        let Some(id) = self.workspace.tabs().active_id() else {
            return;
        };
        if let Some(buffer) = self.buffers.get(&id) {
            show_find_replace_dialog(buffer, &self.widgets.text_editor);
        }
    }

    fn font_dialog(&mut self) {
        let Some(current) = self.workspace.tabs().active().map(|s| s.style) else {
            return;
        };
        if let Some(style) = show_font_dialog(&current) {
            self.edit_active_style(|s| *s = style);
        }
    }

    fn edit_active_style(&mut self, edit: impl FnOnce(&mut TextStyle)) {
        if let Some(session) = self.workspace.tabs_mut().active_mut() {
            edit(&mut session.style);
        }
        self.apply_active_style();
    }

    fn apply_active_style(&mut self) {
        let dark = self.workspace.settings().dark_mode;
        let style = self
            .workspace
            .tabs()
            .active()
            .map(|s| s.style)
            .unwrap_or_default();
        apply_text_style(&mut self.widgets.text_editor, &style, dark);
        self.widgets.toolbar.sync(&style);
    }

    // --- Theme ---

    fn apply_dark_mode(&mut self) {
        let dark = self.workspace.settings().dark_mode;
        let w = &mut self.widgets;
        apply_theme(&mut w.wind, &mut w.menu, &mut w.text_editor, dark);
        w.tab_bar.apply_theme(dark);
        w.settings.sync(dark);
        set_menu_checkbox(&w.menu, DARK_MODE_ITEM, dark);
        self.apply_active_style();
    }
}

fn pick_color(title: &str) -> Option<Rgb> {
    dialog::color_chooser(title, ColorMode::Byte).map(|(r, g, b)| Rgb(r, g, b))
}
