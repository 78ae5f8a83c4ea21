//! Screen geometry shared by drawing and mouse hit-testing.
//!
//! `ScreenLayout::compute` is a pure function of the terminal area and the
//! current `App` state, so the rectangle a control is drawn in is exactly the
//! rectangle a click is tested against.

use std::borrow::Cow;

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::widgets::Block;

use crate::app::wishes::WishList;
use crate::app::App;

/// Widest the container grows on large terminals.
pub const MAX_CONTAINER_WIDTH: u16 = 64;
pub const REMOVE_LABEL: &str = " Remove ";
pub const ADD_LABEL: &str = "Add";
const REMOVE_WIDTH: u16 = REMOVE_LABEL.len() as u16;
const ADD_WIDTH: u16 = 9;
const TOGGLE_WIDTH: u16 = 5;
// left pad + selection marker + gap before Remove + right pad
const ROW_CHROME: u16 = 4;

/// Geometry of one visible list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowLayout {
    /// Position of the wish in the list at the time of layout.
    pub index: usize,
    pub area: Rect,
    pub marker: Rect,
    pub text: Rect,
    pub remove: Rect,
    /// Wrapped text lines that fit in `text`.
    pub lines: Vec<String>,
}

/// What sits under a mouse position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    ToggleTheme,
    Input,
    Add,
    Remove(usize),
    Row(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub page: Rect,
    pub help: Rect,
    pub container: Rect,
    pub title: Rect,
    pub toggle: Rect,
    pub input: Rect,
    pub add_button: Rect,
    pub list: Rect,
    pub rows: Vec<RowLayout>,
}

impl ScreenLayout {
    pub fn compute(area: Rect, app: &App) -> Self {
        let [body, help] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let width = body.width.min(MAX_CONTAINER_WIDTH);
        let x = body.x + (body.width - width) / 2;
        // Leave a one-line margin above and below when there is room for it.
        let (y, height) = if body.height >= 12 {
            (body.y + 1, body.height - 2)
        } else {
            (body.y, body.height)
        };
        let container = Rect::new(x, y, width, height);
        let inner = Block::bordered()
            .inner(container)
            .inner(Margin::new(1, 0));

        let [header, _, entry, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);
        let [title, toggle] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)]).areas(header);
        let [input, _, add_button] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(ADD_WIDTH),
        ])
        .areas(entry);

        let rows = layout_rows(list, &app.wishes, app.selected);

        ScreenLayout {
            page: area,
            help,
            container,
            title,
            toggle,
            input,
            add_button,
            list,
            rows,
        }
    }

    /// Find the control under (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if self.toggle.contains(pos) {
            return Some(Hit::ToggleTheme);
        }
        if self.add_button.contains(pos) {
            return Some(Hit::Add);
        }
        if self.input.contains(pos) {
            return Some(Hit::Input);
        }
        for r in &self.rows {
            if r.remove.contains(pos) {
                return Some(Hit::Remove(r.index));
            }
            if r.area.contains(pos) {
                return Some(Hit::Row(r.index));
            }
        }
        None
    }

    pub fn row(&self, index: usize) -> Option<&RowLayout> {
        self.rows.iter().find(|r| r.index == index)
    }
}

/// Word-wrap a wish to `width` columns, breaking words that are too long.
pub fn wrap_wish(text: &str, width: usize) -> Vec<String> {
    let opts = textwrap::Options::new(width.max(1)).break_words(true);
    let lines: Vec<String> = textwrap::wrap(text, opts)
        .into_iter()
        .map(Cow::into_owned)
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

// Smallest first row such that rows `start..=selected` (with one blank line
// between rows) fit in `height`.
fn first_visible(heights: &[u16], selected: usize, height: u16) -> usize {
    let mut start = 0;
    while start < selected {
        let used: u32 = heights[start..=selected].iter().map(|&h| u32::from(h)).sum::<u32>()
            + (selected - start) as u32;
        if used <= u32::from(height) {
            break;
        }
        start += 1;
    }
    start
}

fn layout_rows(list: Rect, wishes: &WishList, selected: usize) -> Vec<RowLayout> {
    if wishes.is_empty() || list.width == 0 || list.height == 0 {
        return Vec::new();
    }
    let text_width = list.width.saturating_sub(ROW_CHROME + REMOVE_WIDTH);
    let wrapped: Vec<Vec<String>> = wishes
        .iter()
        .map(|w| wrap_wish(w, usize::from(text_width)))
        .collect();
    let heights: Vec<u16> = wrapped
        .iter()
        .map(|l| u16::try_from(l.len()).unwrap_or(u16::MAX))
        .collect();
    let selected = selected.min(wishes.len() - 1);
    let start = first_visible(&heights, selected, list.height);

    let mut rows = Vec::new();
    let mut y = list.y;
    let bottom = list.bottom();
    for (index, mut lines) in wrapped.into_iter().enumerate().skip(start) {
        if y >= bottom {
            break;
        }
        let h = heights[index].min(bottom - y);
        lines.truncate(usize::from(h));
        let area = Rect::new(list.x, y, list.width, h);
        let marker = Rect::new(list.x + 1, y, 1, 1).intersection(list);
        let text = Rect::new(list.x + 2, y, text_width, h).intersection(list);
        let remove_x = list.right().saturating_sub(REMOVE_WIDTH + 1).max(list.x);
        let remove = Rect::new(remove_x, y, REMOVE_WIDTH, 1).intersection(list);
        rows.push(RowLayout {
            index,
            area,
            marker,
            text,
            remove,
            lines,
        });
        y = y.saturating_add(h).saturating_add(1);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(wishes: &[&str]) -> App {
        let mut app = App::new();
        app.wishes = wishes.iter().copied().collect();
        app
    }

    #[test]
    fn container_is_centered_and_capped() {
        let app = App::new();
        let l = ScreenLayout::compute(Rect::new(0, 0, 100, 30), &app);
        assert_eq!(l.container.width, MAX_CONTAINER_WIDTH);
        assert_eq!(l.container.x, 18);
        assert_eq!(l.help, Rect::new(0, 29, 100, 1));
        assert!(l.rows.is_empty());
    }

    #[test]
    fn rows_are_stacked_with_gaps() {
        let app = app_with(&["A", "B", "C"]);
        let l = ScreenLayout::compute(Rect::new(0, 0, 80, 30), &app);
        assert_eq!(l.rows.len(), 3);
        assert_eq!(l.rows[1].area.y, l.rows[0].area.y + 2);
        assert_eq!(l.rows[2].lines, vec!["C".to_string()]);
    }

    #[test]
    fn hit_finds_controls() {
        let app = app_with(&["A", "B"]);
        let l = ScreenLayout::compute(Rect::new(0, 0, 80, 30), &app);
        assert_eq!(l.hit(l.toggle.x, l.toggle.y), Some(Hit::ToggleTheme));
        assert_eq!(l.hit(l.add_button.x + 1, l.add_button.y + 1), Some(Hit::Add));
        assert_eq!(l.hit(l.input.x + 2, l.input.y + 1), Some(Hit::Input));
        let r = &l.rows[1];
        assert_eq!(l.hit(r.remove.x, r.remove.y), Some(Hit::Remove(1)));
        assert_eq!(l.hit(r.text.x, r.text.y), Some(Hit::Row(1)));
        assert_eq!(l.hit(0, 0), None);
    }

    #[test]
    fn selected_row_scrolls_into_view() {
        let wishes: Vec<String> = (0..40).map(|i| format!("wish {}", i)).collect();
        let mut app = App::new();
        app.wishes = wishes.iter().map(String::as_str).collect();
        app.selected = 39;
        let l = ScreenLayout::compute(Rect::new(0, 0, 80, 24), &app);
        assert!(l.row(39).is_some());
        assert!(l.row(0).is_none());
    }

    #[test]
    fn long_words_are_broken() {
        let lines = wrap_wish("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_wish("", 10), vec![String::new()]);
    }

    #[test]
    fn first_visible_keeps_selection_on_screen() {
        assert_eq!(first_visible(&[1, 1, 1, 1], 3, 7), 0);
        assert_eq!(first_visible(&[1, 1, 1, 1], 3, 5), 1);
        assert_eq!(first_visible(&[3, 3], 1, 2), 1);
    }
}
