use super::session::SessionId;
use super::style::FontFamily;

/// All messages that can be sent through the FLTK channel.
/// Each menu, toolbar or page callback sends one of these; the dispatch
/// loop in main hands them to `AppState`.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    TabCloseActive,
    GoHome,
    FileExit,
    WindowClose,

    // Tabs
    TabSwitch(SessionId),
    TabClose(SessionId),
    BufferModified(SessionId),

    // Edit
    ShowFindReplace,

    // Format
    ShowFontDialog,
    SetFontFamily(FontFamily),
    SetFontSize(u32),
    ToggleBold,
    ToggleItalic,
    PickTextColor,
    PickBackgroundColor,

    // View
    ToggleDarkMode,
    SetDarkMode(bool),

    // Pages
    ShowAbout,
    ShowSettings,

    // Welcome screen
    RecentFilterChanged,
    RecentOpen(usize),
}
