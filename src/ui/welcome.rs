use fltk::{
    app::{self, Sender},
    browser::HoldBrowser,
    button::Button,
    enums::{Align, CallbackTrigger, Font},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    menu::Choice,
    prelude::*,
};

use crate::app::domain::{DocumentRecord, Message};
use crate::app::services::recent::RecencyBucket;

const COLUMN_WIDTHS: [i32; 3] = [180, 320, 150];

/// Home screen: recent documents with search and recency filters.
pub struct WelcomePage {
    pub page: Flex,
    search: Input,
    recency: Choice,
    table: HoldBrowser,
}

impl WelcomePage {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut page = Flex::default();
        page.set_type(FlexType::Column);
        page.set_margin(30);
        page.set_spacing(10);

        let mut title = Frame::default().with_label("Modern Text Editor");
        title.set_label_size(24);
        title.set_label_font(Font::HelveticaBold);
        page.fixed(&title, 50);

        // Search and filter row
        let mut row = Flex::default();
        row.set_type(FlexType::Row);
        row.set_spacing(8);
        Frame::default().with_size(0, 0); // left padding
        let search_label = Frame::default().with_label("Search:").with_align(Align::Right | Align::Inside);
        row.fixed(&search_label, 60);
        let mut search = Input::default();
        search.set_tooltip("Search documents...");
        search.set_trigger(CallbackTrigger::Changed);
        search.set_callback({ let s = *sender; move |_| s.send(Message::RecentFilterChanged) });
        row.fixed(&search, 260);
        let filter_label = Frame::default().with_label("Filter:").with_align(Align::Right | Align::Inside);
        row.fixed(&filter_label, 50);
        let mut recency = Choice::default();
        for bucket in RecencyBucket::all() {
            recency.add_choice(bucket.display_name());
        }
        recency.set_value(0);
        recency.set_callback({ let s = *sender; move |_| s.send(Message::RecentFilterChanged) });
        row.fixed(&recency, 120);
        Frame::default().with_size(0, 0); // right padding
        row.end();
        page.fixed(&row, 30);

        let mut header = Flex::default();
        header.set_type(FlexType::Row);
        for (title, width) in ["Name", "Location", "Last Modified"].iter().zip(COLUMN_WIDTHS) {
            let mut column = Frame::default().with_label(title).with_align(Align::Left | Align::Inside);
            column.set_label_font(Font::HelveticaBold);
            header.fixed(&column, width);
        }
        Frame::default();
        header.end();
        page.fixed(&header, 20);

        let mut table = HoldBrowser::default();
        table.set_column_widths(&COLUMN_WIDTHS);
        table.set_column_char('\t');
        // Paths may contain '@'; no inline formatting.
        table.set_format_char('\0');
        table.set_callback({
            let s = *sender;
            move |b| {
                let row = b.value();
                if app::event_clicks() && row > 0 {
                    s.send(Message::RecentOpen((row - 1) as usize));
                }
            }
        });

        // Buttons
        let mut buttons = Flex::default();
        buttons.set_type(FlexType::Row);
        buttons.set_spacing(20);
        Frame::default();
        let mut new_btn = Button::default().with_label("New Document");
        buttons.fixed(&new_btn, 130);
        new_btn.set_callback({ let s = *sender; move |_| s.send(Message::FileNew) });
        let mut open_btn = Button::default().with_label("Open File...");
        buttons.fixed(&open_btn, 110);
        open_btn.set_callback({ let s = *sender; move |_| s.send(Message::FileOpen) });
        let mut about_btn = Button::default().with_label("About");
        buttons.fixed(&about_btn, 80);
        about_btn.set_callback({ let s = *sender; move |_| s.send(Message::ShowAbout) });
        let mut settings_btn = Button::default().with_label("Settings");
        buttons.fixed(&settings_btn, 80);
        settings_btn.set_callback({ let s = *sender; move |_| s.send(Message::ShowSettings) });
        Frame::default();
        buttons.end();
        page.fixed(&buttons, 35);

        page.end();

        Self { page, search, recency, table }
    }

    pub fn query(&self) -> String {
        self.search.value()
    }

    pub fn bucket(&self) -> RecencyBucket {
        RecencyBucket::from_index(self.recency.value().max(0) as usize)
    }

    /// Replace the table rows. Row N (1-based) shows `records[N - 1]`.
    pub fn show_records(&mut self, records: &[&DocumentRecord]) {
        self.table.clear();
        for record in records {
            self.table.add(&table_row(record));
        }
        self.table.redraw();
    }
}

fn table_row(record: &DocumentRecord) -> String {
    let clean = |s: &str| s.replace('\t', " ");
    format!(
        "{}\t{}\t{}",
        clean(record.file_name()),
        clean(&record.path().display().to_string()),
        clean(record.last_modified())
    )
}
