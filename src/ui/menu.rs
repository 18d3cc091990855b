use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::Message;

pub const DARK_MODE_ITEM: &str = "View/Dark Mode";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Close Tab", Shortcut::Ctrl | 'w', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::TabCloseActive) });
    menu.add("File/Home", Shortcut::Ctrl | 'h', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::GoHome) });
    menu.add("File/Exit", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileExit) });

    // Edit
    menu.add("Edit/Find and Replace...", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFindReplace) });

    // Format
    menu.add("Format/Font...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFontDialog) });

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(DARK_MODE_ITEM, Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // Help
    menu.add("Help/About", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Set or clear a toggle item without firing its callback.
pub fn set_menu_checkbox(menu: &MenuBar, path: &str, checked: bool) {
    let idx = menu.find_index(path);
    if idx >= 0 {
        if let Some(mut item) = menu.at(idx) {
            if checked {
                item.set();
            } else {
                item.clear();
            }
        }
    }
}
