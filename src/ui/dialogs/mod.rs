pub mod find;
pub mod font;

use fltk::{app, prelude::*, window::Window};

/// Run a dialog's event loop, closing the dialog if the app is quitting
/// (e.g. the main window is closed while a dialog is open).
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}
