use fltk::{
    app::Sender,
    button::{Button, ToggleButton},
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    menu::Choice,
    prelude::*,
};

use crate::app::domain::style::FONT_SIZES;
use crate::app::domain::{FontFamily, Message, TextStyle};

pub const TOOLBAR_HEIGHT: i32 = 34;

/// Formatting controls above the tab bar.
pub struct Toolbar {
    pub row: Flex,
    family: Choice,
    size: Choice,
    bold: ToggleButton,
    italic: ToggleButton,
}

fn label(text: &str, width: i32, row: &mut Flex) {
    let frame = Frame::default()
        .with_label(text)
        .with_align(Align::Right | Align::Inside);
    row.fixed(&frame, width);
}

impl Toolbar {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut row = Flex::default();
        row.set_type(FlexType::Row);
        row.set_margin(3);
        row.set_spacing(4);

        let mut home = Button::default().with_label("Home");
        row.fixed(&home, 60);
        home.set_callback({ let s = *sender; move |_| s.send(Message::GoHome) });

        label("Font:", 40, &mut row);
        let mut family = Choice::default();
        for f in FontFamily::all() {
            family.add_choice(f.display_name());
        }
        family.set_value(0);
        row.fixed(&family, 110);
        family.set_callback({
            let s = *sender;
            move |c| {
                if let Some(f) = FontFamily::from_index(c.value().max(0) as usize) {
                    s.send(Message::SetFontFamily(f));
                }
            }
        });

        label("Size:", 36, &mut row);
        let mut size = Choice::default();
        for s in FONT_SIZES {
            size.add_choice(&s.to_string());
        }
        row.fixed(&size, 60);
        size.set_callback({
            let s = *sender;
            move |c| {
                if let Some(&pt) = FONT_SIZES.get(c.value().max(0) as usize) {
                    s.send(Message::SetFontSize(pt));
                }
            }
        });

        let mut bold = ToggleButton::default().with_label("B");
        bold.set_label_font(Font::HelveticaBold);
        row.fixed(&bold, 30);
        bold.set_callback({ let s = *sender; move |_| s.send(Message::ToggleBold) });

        let mut italic = ToggleButton::default().with_label("I");
        italic.set_label_font(Font::HelveticaItalic);
        row.fixed(&italic, 30);
        italic.set_callback({ let s = *sender; move |_| s.send(Message::ToggleItalic) });

        let mut text_color = Button::default().with_label("Text...");
        row.fixed(&text_color, 60);
        text_color.set_callback({ let s = *sender; move |_| s.send(Message::PickTextColor) });

        let mut bg_color = Button::default().with_label("BG...");
        row.fixed(&bg_color, 60);
        bg_color.set_callback({ let s = *sender; move |_| s.send(Message::PickBackgroundColor) });

        Frame::default(); // filler
        row.end();

        let mut toolbar = Self { row, family, size, bold, italic };
        toolbar.sync(&TextStyle::default());
        toolbar
    }

    /// Show the active tab's style without firing callbacks.
    pub fn sync(&mut self, style: &TextStyle) {
        self.family.set_value(style.family.index() as i32);
        self.size.set_value(style.size_index() as i32);
        self.bold.set_value(style.bold);
        self.italic.set_value(style.italic);
    }
}
