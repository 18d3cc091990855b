use std::path::PathBuf;

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::services::file_filters::text_files_filter;

fn run_chooser(kind: FileDialogType, title: &str) -> Option<PathBuf> {
    let is_save = matches!(kind, FileDialogType::BrowseSaveFile);
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(&text_files_filter());
    if is_save {
        nfc.set_option(FileDialogOptions::SaveAsConfirm);
    }
    nfc.show(); // blocks until closed
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog() -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, "Open Text File")
}

pub fn native_save_dialog() -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, "Save As")
}
