use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    draw,
    enums::{Color, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::domain::{EditingSession, Message, SessionId};

pub const TAB_BAR_HEIGHT: i32 = 30;

const TAB_MIN_W: i32 = 60;
const TAB_MAX_W: i32 = 200;
const TAB_SPACING: i32 = 1;
const TAB_PADDING: i32 = 10;
const CLOSE_SIZE: i32 = 14;
const CLOSE_INSET: i32 = 6;
const NEW_TAB_W: i32 = 28;
const NEW_TAB_INSET: i32 = 4;
const ACCENT_H: i32 = 2;
const LABEL_SIZE: i32 = 12;

/// Horizontal extent of one clickable area, relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    x: i32,
    w: i32,
}

impl Slot {
    fn contains(&self, mx: i32) -> bool {
        mx >= self.x && mx < self.x + self.w
    }

    /// Square (x, y) origin of the close button inside a tab.
    fn close_origin(&self, top: i32) -> (i32, i32) {
        (
            self.x + self.w - CLOSE_INSET - CLOSE_SIZE,
            top + (TAB_BAR_HEIGHT - CLOSE_SIZE) / 2,
        )
    }
}

/// Tabs in order, then the "+" button.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Strip {
    tabs: Vec<Slot>,
    new_tab: Slot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Tab(usize),
    Close(usize),
    NewTab,
    Empty,
}

impl Strip {
    fn layout(count: usize, width: i32) -> Self {
        if count == 0 {
            return Self {
                tabs: Vec::new(),
                new_tab: Slot { x: NEW_TAB_INSET, w: NEW_TAB_W },
            };
        }

        let n = count as i32;
        let room = width - NEW_TAB_W - 2 * NEW_TAB_INSET - TAB_SPACING * (n - 1);
        let w = (room / n).clamp(TAB_MIN_W, TAB_MAX_W);
        let tabs: Vec<Slot> = (0..n).map(|i| Slot { x: i * (w + TAB_SPACING), w }).collect();
        let new_tab = Slot { x: n * (w + TAB_SPACING) + NEW_TAB_INSET, w: NEW_TAB_W };
        Self { tabs, new_tab }
    }

    /// What sits under the pointer. `top` is the widget's y; `mx` is relative
    /// to the widget's x.
    fn target_at(&self, top: i32, mx: i32, my: i32) -> Target {
        if !(top..top + TAB_BAR_HEIGHT).contains(&my) {
            return Target::Empty;
        }
        if let Some(index) = self.tabs.iter().position(|slot| slot.contains(mx)) {
            let (cx, cy) = self.tabs[index].close_origin(top);
            let on_close = (cx..=cx + CLOSE_SIZE).contains(&mx) && (cy..=cy + CLOSE_SIZE).contains(&my);
            return if on_close { Target::Close(index) } else { Target::Tab(index) };
        }
        if self.new_tab.contains(mx) {
            return Target::NewTab;
        }
        Target::Empty
    }
}

struct Entry {
    id: SessionId,
    label: String,
    active: bool,
}

struct TabBarState {
    entries: Vec<Entry>,
    strip: Strip,
    dark: bool,
    hover: Target,
    sender: Sender<Message>,
}

/// Custom-drawn strip of tabs with a modified marker, close buttons and a "+" button.
pub struct TabBar {
    pub widget: Widget,
    state: Rc<RefCell<TabBarState>>,
}

impl TabBar {
    pub fn new(x: i32, y: i32, w: i32, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(TabBarState {
            entries: Vec::new(),
            strip: Strip::layout(0, w),
            dark: false,
            hover: Target::Empty,
            sender,
        }));

        let mut widget = Widget::new(x, y, w, TAB_BAR_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let mut st = draw_state.borrow_mut();
            // Flex resizes us without notice; lay out against the current width.
            st.strip = Strip::layout(st.entries.len(), wid.w());
            paint(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_event(wid, event, &handle_state));

        Self { widget, state }
    }

    pub fn rebuild(&mut self, sessions: &[EditingSession], active_id: Option<SessionId>) {
        let mut st = self.state.borrow_mut();
        st.entries = sessions
            .iter()
            .map(|s| Entry {
                id: s.id(),
                label: tab_label(s.display_name(), s.is_modified()),
                active: active_id == Some(s.id()),
            })
            .collect();
        st.hover = Target::Empty;
        st.strip = Strip::layout(st.entries.len(), self.widget.w());
        drop(st);
        self.widget.redraw();
    }

    pub fn apply_theme(&mut self, is_dark: bool) {
        self.state.borrow_mut().dark = is_dark;
        self.widget.redraw();
    }
}

fn tab_label(name: &str, modified: bool) -> String {
    if modified {
        format!("\u{25cf} {}", name)
    } else {
        name.to_string()
    }
}

struct Palette {
    strip: Color,
    tab: Color,
    selected: Color,
    hover: Color,
    text: Color,
    dim_text: Color,
    accent: Color,
}

impl Palette {
    fn new(dark: bool) -> Self {
        let accent = Color::from_rgb(66, 133, 244);
        if dark {
            Self {
                strip: Color::from_rgb(30, 30, 30),
                tab: Color::from_rgb(45, 45, 45),
                selected: Color::from_rgb(63, 63, 63),
                hover: Color::from_rgb(78, 78, 78),
                text: Color::from_rgb(225, 225, 225),
                dim_text: Color::from_rgb(150, 150, 150),
                accent,
            }
        } else {
            Self {
                strip: Color::from_rgb(205, 205, 205),
                tab: Color::from_rgb(225, 225, 225),
                selected: Color::White,
                hover: Color::from_rgb(190, 190, 190),
                text: Color::Black,
                dim_text: Color::from_rgb(85, 85, 85),
                accent,
            }
        }
    }
}

/// Shorten `label` with a trailing ellipsis until it fits `max_w` pixels
/// in the current draw font.
fn elide(label: &str, max_w: i32) -> String {
    let fits = |s: &str| draw::width(s) <= f64::from(max_w);
    if max_w <= 0 {
        return String::new();
    }
    if fits(label) {
        return label.to_string();
    }

    let chars: Vec<char> = label.chars().collect();
    let with_ellipsis = |n: usize| chars[..n].iter().chain(['\u{2026}'].iter()).collect::<String>();
    let (mut keep, mut upper) = (0, chars.len());
    while keep < upper {
        let mid = (keep + upper).div_ceil(2);
        if fits(&with_ellipsis(mid)) {
            keep = mid;
        } else {
            upper = mid - 1;
        }
    }
    with_ellipsis(keep)
}

fn paint(wid: &Widget, st: &TabBarState) {
    let (left, top, h) = (wid.x(), wid.y(), wid.h());
    let pal = Palette::new(st.dark);

    draw::draw_rect_fill(left, top, wid.w(), h, pal.strip);
    draw::set_font(Font::Helvetica, LABEL_SIZE);

    for (index, (slot, entry)) in st.strip.tabs.iter().zip(&st.entries).enumerate() {
        let x = left + slot.x;
        let fill = if entry.active { pal.selected } else { pal.tab };
        draw::draw_rect_fill(x, top + 2, slot.w, h - 2, fill);
        if entry.active {
            draw::draw_rect_fill(x, top, slot.w, ACCENT_H, pal.accent);
        }

        let fg = if entry.active { pal.text } else { pal.dim_text };
        let label_w = slot.w - 2 * TAB_PADDING - CLOSE_INSET - CLOSE_SIZE;
        draw::set_draw_color(fg);
        draw::draw_text(&elide(&entry.label, label_w), x + TAB_PADDING, top + (h + LABEL_SIZE) / 2);

        let (cx, cy) = slot.close_origin(top);
        let cx = left + cx;
        if st.hover == Target::Close(index) {
            draw::draw_rect_fill(cx - 2, cy - 2, CLOSE_SIZE + 4, CLOSE_SIZE + 4, pal.hover);
        }
        // × from two diagonals, inset so the strokes stay inside the hover box.
        let (x0, y0, x1, y1) = (cx + 3, cy + 3, cx + CLOSE_SIZE - 3, cy + CLOSE_SIZE - 3);
        draw::set_draw_color(fg);
        draw::draw_line(x0, y0, x1, y1);
        draw::draw_line(x0, y1, x1, y0);
    }

    let plus = st.strip.new_tab;
    let px = left + plus.x;
    let hovered = st.hover == Target::NewTab;
    draw::draw_rect_fill(px, top + 2, plus.w, h - 4, if hovered { pal.hover } else { pal.tab });
    let (mid_x, mid_y) = (px + plus.w / 2, top + h / 2);
    draw::set_draw_color(if hovered { pal.text } else { pal.dim_text });
    draw::draw_line(mid_x - 5, mid_y, mid_x + 5, mid_y);
    draw::draw_line(mid_x, mid_y - 5, mid_x, mid_y + 5);
}

fn handle_event(wid: &mut Widget, event: Event, state: &Rc<RefCell<TabBarState>>) -> bool {
    let pointer = || state.borrow().strip.target_at(wid.y(), app::event_x() - wid.x(), app::event_y());

    match event {
        Event::Push => {
            let target = pointer();
            let st = state.borrow();
            let message = match (target, app::event_button()) {
                (Target::NewTab, 1) => Message::FileNew,
                // Middle click closes like the × button.
                (Target::Close(i), 1) | (Target::Tab(i) | Target::Close(i), 2) => {
                    Message::TabClose(st.entries[i].id)
                }
                (Target::Tab(i), 1) => Message::TabSwitch(st.entries[i].id),
                _ => return false,
            };
            st.sender.send(message);
            true
        }
        Event::Move | Event::Leave => {
            let target = if event == Event::Move { pointer() } else { Target::Empty };
            let changed = {
                let mut st = state.borrow_mut();
                std::mem::replace(&mut st.hover, target) != target
            };
            if changed {
                wid.redraw();
            }
            event == Event::Move
        }
        Event::Enter => true,
        _ => false,
    }
}
