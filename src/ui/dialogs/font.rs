use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    button::{Button, CheckButton},
    enums::Align,
    frame::Frame,
    menu::Choice,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::style::FONT_SIZES;
use crate::app::domain::{FontFamily, TextStyle};

/// Show the Font Settings dialog. Returns the edited style on OK.
///
/// Colours are carried over untouched; only family, size, bold and italic
/// are offered here.
pub fn show_font_dialog(current: &TextStyle) -> Option<TextStyle> {
    let mut dialog_win = Window::default()
        .with_size(320, 220)
        .with_label("Font Settings")
        .center_screen();
    dialog_win.make_modal(true);

    let left = Align::Right | Align::Inside;

    Frame::default().with_pos(10, 20).with_size(70, 25).with_label("Font:").with_align(left);
    let mut family = Choice::default().with_pos(90, 20).with_size(200, 25);
    for f in FontFamily::all() {
        family.add_choice(f.display_name());
    }
    family.set_value(current.family.index() as i32);

    Frame::default().with_pos(10, 55).with_size(70, 25).with_label("Size:").with_align(left);
    let mut size = Choice::default().with_pos(90, 55).with_size(80, 25);
    for s in FONT_SIZES {
        size.add_choice(&s.to_string());
    }
    size.set_value(current.size_index() as i32);

    Frame::default().with_pos(10, 90).with_size(70, 25).with_label("Style:").with_align(left);
    let mut bold = CheckButton::default().with_pos(90, 90).with_size(100, 25).with_label("Bold");
    bold.set_checked(current.bold);
    let mut italic = CheckButton::default().with_pos(90, 115).with_size(100, 25).with_label("Italic");
    italic.set_checked(current.italic);

    let mut ok_btn = Button::default().with_pos(110, 175).with_size(90, 30).with_label("OK");
    let mut cancel_btn = Button::default().with_pos(210, 175).with_size(90, 30).with_label("Cancel");

    dialog_win.end();
    dialog_win.show();

    let accepted = Rc::new(Cell::new(false));

    let acc = accepted.clone();
    let mut dlg = dialog_win.clone();
    ok_btn.set_callback(move |_| {
        acc.set(true);
        dlg.hide();
    });

    let mut dlg = dialog_win.clone();
    cancel_btn.set_callback(move |_| dlg.hide());

    run_dialog(&dialog_win);

    if !accepted.get() {
        return None;
    }

    let mut style = *current;
    if let Some(f) = FontFamily::from_index(family.value().max(0) as usize) {
        style.set_family(f);
    }
    if let Some(&pt) = FONT_SIZES.get(size.value().max(0) as usize) {
        style.set_size(pt);
    }
    style.bold = bold.is_checked();
    style.italic = italic.is_checked();
    Some(style)
}
