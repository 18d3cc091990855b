use std::path::PathBuf;

use fltk::dialog;

use crate::app::controllers::{CloseChoice, Prompter};
use super::file_dialogs::native_save_dialog;

/// Native FLTK dialogs behind the close and save prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FltkPrompter;

impl Prompter for FltkPrompter {
    fn confirm_close(&mut self, display_name: &str) -> CloseChoice {
        dialog::message_title("Save Changes");
        let choice = dialog::choice2_default(
            &format!("Save changes to {}?", display_name),
            "Save",
            "Don't Save",
            "Cancel",
        );
        match choice {
            Some(0) => CloseChoice::Save,
            Some(1) => CloseChoice::DontSave,
            _ => CloseChoice::Cancel,
        }
    }

    fn choose_save_path(&mut self, _display_name: &str) -> Option<PathBuf> {
        native_save_dialog()
    }

    fn show_error(&mut self, title: &str, message: &str) {
        dialog::message_title(title);
        dialog::alert_default(message);
    }

    fn show_notice(&mut self, title: &str, message: &str) {
        dialog::message_title(title);
        dialog::message_default(message);
    }
}
