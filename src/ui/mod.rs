//! FLTK widgets. Callbacks only send `Message`s; `app::state` reacts to them.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod pages;
pub mod prompter;
pub mod tab_bar;
pub mod theme;
pub mod toolbar;
pub mod welcome;
