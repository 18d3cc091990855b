//! Static pages: About and Settings. Each has a "Back to Home" button.

use fltk::{
    app::Sender,
    browser::Browser,
    button::{Button, ToggleButton},
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::Message;

fn centered_column() -> Flex {
    let mut flex = Flex::default();
    flex.set_type(FlexType::Column);
    flex.set_margin(40);
    flex.set_spacing(10);
    flex
}

fn back_button(flex: &mut Flex, sender: &Sender<Message>) {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    Frame::default();
    let mut back = Button::default().with_label("Back to Home");
    row.fixed(&back, 140);
    Frame::default();
    row.end();
    flex.fixed(&row, 35);
    back.set_callback({ let s = *sender; move |_| s.send(Message::GoHome) });
}

/// Name and student ID of each member of the development team.
const DEVELOPERS: [(&str, &str); 6] = [
    ("Abel Ayele", "DDU1500785"),
    ("Hebron Solomon", "DDU1502273"),
    ("Nebiyu Ermiyas", "DDU1501530"),
    ("Trhas Abrha", "DDU1502253"),
    ("Yabsira Dejene", "DDU1501750"),
    ("Yenus Kindu", "DDU1501779"),
];

const TEAM_COLUMN_WIDTHS: [i32; 2] = [220, 160];

/// Browser lines for the team table, header first.
fn team_rows() -> Vec<String> {
    std::iter::once("@bName\t@bID".to_string())
        .chain(DEVELOPERS.iter().map(|(name, id)| format!("{}\t{}", name, id)))
        .collect()
}

pub struct AboutPage {
    pub page: Flex,
}

impl AboutPage {
    pub fn new(sender: &Sender<Message>) -> Self {
        let version = env!("CARGO_PKG_VERSION");
        let mut page = centered_column();

        Frame::default(); // top spacer

        let mut title = Frame::default().with_label("Modern Text Editor");
        title.set_label_size(24);
        title.set_label_font(Font::HelveticaBold);
        page.fixed(&title, 40);

        let mut version_frame = Frame::default().with_label(&format!("Version {}", version));
        version_frame.set_label_size(16);
        page.fixed(&version_frame, 25);

        let mut desc = Frame::default()
            .with_label("A tabbed text editor with a recent-documents home screen.\nBuilt with Rust and FLTK.")
            .with_align(Align::Center | Align::Inside);
        desc.set_label_size(13);
        desc.set_label_color(Color::from_rgb(120, 120, 120));
        page.fixed(&desc, 50);

        let mut team_title = Frame::default().with_label("Development Team:");
        team_title.set_label_size(18);
        team_title.set_label_font(Font::HelveticaBold);
        page.fixed(&team_title, 30);

        let mut team_row = Flex::default();
        team_row.set_type(FlexType::Row);
        Frame::default();
        let mut team = Browser::default();
        team.set_column_widths(&TEAM_COLUMN_WIDTHS);
        team.set_column_char('\t');
        for row in team_rows() {
            team.add(&row);
        }
        team_row.fixed(&team, TEAM_COLUMN_WIDTHS.iter().sum::<i32>() + 20);
        Frame::default();
        team_row.end();
        page.fixed(&team_row, 150);

        let mut copyright = Frame::default().with_label("\u{00a9} 2025 Modern Text Editor Team");
        copyright.set_label_size(14);
        page.fixed(&copyright, 40);

        back_button(&mut page, sender);
        Frame::default(); // bottom spacer
        page.end();

        Self { page }
    }
}

pub struct SettingsPage {
    pub page: Flex,
    dark_mode: ToggleButton,
}

impl SettingsPage {
    pub fn new(sender: &Sender<Message>, dark_mode: bool) -> Self {
        let mut page = centered_column();

        Frame::default();

        let mut title = Frame::default().with_label("Settings");
        title.set_label_size(24);
        title.set_label_font(Font::HelveticaBold);
        page.fixed(&title, 40);

        let mut row = Flex::default();
        row.set_type(FlexType::Row);
        row.set_spacing(10);
        Frame::default();
        let appearance = Frame::default().with_label("Appearance:").with_align(Align::Right | Align::Inside);
        row.fixed(&appearance, 100);
        let mut toggle = ToggleButton::default().with_label("Dark Mode");
        toggle.set_value(dark_mode);
        row.fixed(&toggle, 110);
        Frame::default();
        row.end();
        page.fixed(&row, 30);

        toggle.set_callback({
            let s = *sender;
            move |t| s.send(Message::SetDarkMode(t.value()))
        });

        back_button(&mut page, sender);
        Frame::default();
        page.end();

        Self { page, dark_mode: toggle }
    }

    pub fn sync(&mut self, dark_mode: bool) {
        self.dark_mode.set_value(dark_mode);
    }
}
