use fltk::{
    app::Sender,
    enums::Event,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::Message;
use super::pages::{AboutPage, SettingsPage};
use super::tab_bar::{TabBar, TAB_BAR_HEIGHT};
use super::toolbar::{Toolbar, TOOLBAR_HEIGHT};
use super::welcome::WelcomePage;

pub const APP_TITLE: &str = "Modern Text Editor";

pub struct MainWidgets {
    pub wind: Window,
    pub root: Flex,
    pub menu: MenuBar,
    pub welcome: WelcomePage,
    pub editor_page: Flex,
    pub toolbar: Toolbar,
    pub tab_bar: TabBar,
    pub text_editor: TextEditor,
    pub about: AboutPage,
    pub settings: SettingsPage,
}

/// Build the window. All four pages live in one column; only the visible
/// one takes space because `Flex` skips hidden children.
pub fn build_main_window(sender: &Sender<Message>, dark_mode: bool) -> MainWidgets {
    let mut wind = Window::new(100, 100, 900, 650, APP_TITLE);
    wind.set_xclass("modern-text-editor");

    let mut root = Flex::new(0, 0, 900, 650, None);
    root.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    root.fixed(&menu, 30);

    let welcome = WelcomePage::new(sender);

    let mut editor_page = Flex::default();
    editor_page.set_type(FlexType::Column);
    let toolbar = Toolbar::new(sender);
    editor_page.fixed(&toolbar.row, TOOLBAR_HEIGHT);
    let tab_bar = TabBar::new(0, 0, 900, *sender);
    editor_page.fixed(&tab_bar.widget, TAB_BAR_HEIGHT);
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    editor_page.end();

    let about = AboutPage::new(sender);
    let settings = SettingsPage::new(sender, dark_mode);

    root.end();
    wind.resizable(&root);
    wind.end();

    // Escape would otherwise close the main window.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if fltk::app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        root,
        menu,
        welcome,
        editor_page,
        toolbar,
        tab_bar,
        text_editor,
        about,
        settings,
    }
}
