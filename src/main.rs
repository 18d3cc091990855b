use std::path::PathBuf;

use fltk::app;

use modern_text_editor::app::infrastructure::logging;
use modern_text_editor::app::state::AppState;
use modern_text_editor::app::{Message, RecentDocumentsStore, SettingsStore, Workspace};
use modern_text_editor::ui::main_window::build_main_window;
use modern_text_editor::ui::menu::build_menu;

fn main() {
    logging::init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let recent_store = RecentDocumentsStore::default_location();
    let settings_store = SettingsStore::default_location();
    let workspace = Workspace::load(&recent_store, &settings_store);
    tracing::info!(
        recent = workspace.recent().len(),
        dark_mode = workspace.settings().dark_mode,
        "Loaded persisted state"
    );

    let dark_mode = workspace.settings().dark_mode;
    let mut widgets = build_main_window(&sender, dark_mode);
    build_menu(&mut widgets.menu, &sender, dark_mode);

    let mut state = AppState::new(workspace, widgets, sender, recent_store, settings_store);

    for arg in std::env::args_os().skip(1) {
        state.open_path(&PathBuf::from(arg));
    }

    state.show_window();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                break;
            }
        }
    }
    app::quit();
}
