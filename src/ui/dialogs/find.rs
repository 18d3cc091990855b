use std::ops::Range;

use fltk::{
    button::{Button, CheckButton},
    frame::Frame,
    group::{Group, Tabs},
    input::Input,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::run_dialog;
use crate::app::controllers::{notify_not_found, notify_replaced};
use crate::app::services::find_replace::{self, ReplaceOutcome};
use crate::ui::prompter::FltkPrompter;

fn not_found() {
    notify_not_found(&mut FltkPrompter);
}

fn select(buffer: &mut TextBuffer, editor: &mut TextEditor, range: Range<usize>) {
    buffer.select(range.start as i32, range.end as i32);
    editor.set_insert_position(range.end as i32);
    editor.show_insert_position();
}

fn current_selection(buffer: &TextBuffer) -> Option<Range<usize>> {
    buffer
        .selection_position()
        .filter(|(start, end)| start < end)
        .map(|(start, end)| start as usize..end as usize)
}

/// Show the Find and Replace dialog over `buffer`.
///
/// Every search starts from the top of the text, so "Find Next" keeps
/// selecting the first match until the text changes.
pub fn show_find_replace_dialog(buffer: &TextBuffer, editor: &TextEditor) {
    let mut dialog_win = Window::default()
        .with_size(420, 230)
        .with_label("Find and Replace")
        .center_screen();
    dialog_win.make_modal(true);

    let tabs = Tabs::new(10, 10, 400, 170, "");

    let find_tab = Group::new(10, 35, 400, 145, "Find");
    Frame::default().with_pos(20, 50).with_size(80, 30).with_label("Find:");
    let find_input = Input::default().with_pos(110, 50).with_size(280, 30);
    let find_case = CheckButton::default().with_pos(110, 90).with_size(200, 25).with_label("Match case");
    let whole_word = CheckButton::default().with_pos(110, 115).with_size(200, 25).with_label("Whole word only");
    let mut find_btn = Button::default().with_pos(290, 140).with_size(100, 30).with_label("Find Next");
    find_tab.end();

    let replace_tab = Group::new(10, 35, 400, 145, "Replace");
    Frame::default().with_pos(20, 50).with_size(80, 30).with_label("Find:");
    let replace_find_input = Input::default().with_pos(110, 50).with_size(280, 30);
    Frame::default().with_pos(20, 85).with_size(90, 30).with_label("Replace with:");
    let replace_input = Input::default().with_pos(110, 85).with_size(280, 30);
    let replace_case = CheckButton::default().with_pos(110, 120).with_size(120, 25).with_label("Match case");
    let mut replace_btn = Button::default().with_pos(180, 145).with_size(100, 30).with_label("Replace");
    let mut replace_all_btn = Button::default().with_pos(290, 145).with_size(100, 30).with_label("Replace All");
    replace_tab.end();

    tabs.end();

    let mut close_btn = Button::default().with_pos(310, 190).with_size(100, 30).with_label("Close");

    dialog_win.end();
    dialog_win.show();

    // Find Next
    {
        let mut buf = buffer.clone();
        let mut ed = editor.clone();
        find_btn.set_callback(move |_| {
            let text = buf.text();
            match find_replace::find_next(&text, &find_input.value(), find_case.is_checked(), whole_word.is_checked()) {
                Some(range) => select(&mut buf, &mut ed, range),
                None => not_found(),
            }
        });
    }

    // Replace
    {
        let mut buf = buffer.clone();
        let mut ed = editor.clone();
        let find_input = replace_find_input.clone();
        let replace_input = replace_input.clone();
        let case = replace_case.clone();
        replace_btn.set_callback(move |_| {
            let text = buf.text();
            let outcome = find_replace::replace_one(
                &text,
                current_selection(&buf),
                &find_input.value(),
                &replace_input.value(),
                case.is_checked(),
            );
            match outcome {
                ReplaceOutcome::Replaced { caret, .. } => {
                    // Edit in place so the editor keeps its undo history.
                    buf.replace_selection(&replace_input.value());
                    ed.set_insert_position(caret as i32);
                    ed.show_insert_position();
                }
                ReplaceOutcome::Found(range) => select(&mut buf, &mut ed, range),
                ReplaceOutcome::NotFound => not_found(),
            }
        });
    }

    // Replace All
    {
        let mut buf = buffer.clone();
        let mut ed = editor.clone();
        replace_all_btn.set_callback(move |_| {
            let text = buf.text();
            let (new_text, count) = find_replace::replace_all(
                &text,
                &replace_find_input.value(),
                &replace_input.value(),
                replace_case.is_checked(),
            );
            if count > 0 {
                buf.set_text(&new_text);
                ed.set_insert_position(0);
            }
            notify_replaced(&mut FltkPrompter, count);
        });
    }

    let dialog_close = dialog_win.clone();
    close_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    run_dialog(&dialog_win);
}
