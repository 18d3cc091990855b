use fltk::{
    app,
    enums::{Color, Font},
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::{FontFamily, Rgb, TextStyle};

/// Apply the light or dark palette to the whole window.
///
/// Global scheme colours cover the pages and dialogs; the editor and menu
/// get explicit colours so per-tab overrides can be layered on top.
pub fn apply_theme(window: &mut Window, menu: &mut MenuBar, editor: &mut TextEditor, is_dark: bool) {
    if is_dark {
        app::background(45, 45, 45);
        app::background2(63, 63, 63);
        app::foreground(220, 220, 220);
        app::set_selection_color(70, 70, 100);
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // hover
    } else {
        app::background(240, 240, 240);
        app::background2(255, 255, 255);
        app::foreground(0, 0, 0);
        app::set_selection_color(173, 216, 230);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // hover
    }

    editor.set_cursor_color(if is_dark { Color::White } else { Color::Black });
    editor.set_selection_color(if is_dark {
        Color::from_rgb(70, 70, 100)
    } else {
        Color::from_rgb(173, 216, 230)
    });

    menu.redraw();
    window.redraw();
}

/// Configure the editor for one tab's style, falling back to theme colours
/// where the user has not picked any.
pub fn apply_text_style(editor: &mut TextEditor, style: &TextStyle, is_dark: bool) {
    editor.set_text_font(fltk_font(style.family, style.bold, style.italic));
    editor.set_text_size(style.size as i32);

    let (default_fg, default_bg) = if is_dark {
        (Color::from_rgb(220, 220, 220), Color::from_rgb(30, 30, 30))
    } else {
        (Color::Black, Color::White)
    };
    editor.set_text_color(style.text_color.map_or(default_fg, to_color));
    editor.set_color(style.background.map_or(default_bg, to_color));
    editor.redraw();
}

/// Map a family and weight/posture onto FLTK's built-in faces.
///
/// Screen has no italic face, so italic is dropped there.
pub fn fltk_font(family: FontFamily, bold: bool, italic: bool) -> Font {
    match (family, bold, italic) {
        (FontFamily::Sans, false, false) => Font::Helvetica,
        (FontFamily::Sans, true, false) => Font::HelveticaBold,
        (FontFamily::Sans, false, true) => Font::HelveticaItalic,
        (FontFamily::Sans, true, true) => Font::HelveticaBoldItalic,
        (FontFamily::Mono, false, false) => Font::Courier,
        (FontFamily::Mono, true, false) => Font::CourierBold,
        (FontFamily::Mono, false, true) => Font::CourierItalic,
        (FontFamily::Mono, true, true) => Font::CourierBoldItalic,
        (FontFamily::Serif, false, false) => Font::Times,
        (FontFamily::Serif, true, false) => Font::TimesBold,
        (FontFamily::Serif, false, true) => Font::TimesItalic,
        (FontFamily::Serif, true, true) => Font::TimesBoldItalic,
        (FontFamily::Screen, false, _) => Font::Screen,
        (FontFamily::Screen, true, _) => Font::ScreenBold,
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}
