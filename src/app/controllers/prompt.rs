use std::path::PathBuf;

/// Answer to "Save changes to ...?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    Save,
    DontSave,
    Cancel,
}

/// Modal decision points. Every call blocks until the user answers.
///
/// The FLTK window implements this with native dialogs; tests script it.
pub trait Prompter {
    fn confirm_close(&mut self, display_name: &str) -> CloseChoice;

    /// Ask where to save. `None` means the user cancelled the dialog.
    fn choose_save_path(&mut self, display_name: &str) -> Option<PathBuf>;

    fn show_error(&mut self, title: &str, message: &str);

    fn show_notice(&mut self, title: &str, message: &str);
}

/// Tell the user a search came up empty.
pub fn notify_not_found(prompter: &mut impl Prompter) {
    prompter.show_notice("Not Found", "Text not found.");
}

/// Report the outcome of Replace All. Nothing replaced counts as a miss.
pub fn notify_replaced(prompter: &mut impl Prompter, count: usize) {
    if count == 0 {
        notify_not_found(prompter);
    } else {
        prompter.show_notice("Replace All", &format!("Replaced {} occurrence(s)", count));
    }
}
