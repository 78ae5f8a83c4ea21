mod common;

use common::{app_with, lines, render, HEIGHT, WIDTH};
use ratatui::layout::Rect;
use wishlist::ui::{Palette, ScreenLayout, EMPTY_MESSAGE, INPUT_PLACEHOLDER, TITLE};
use wishlist::{App, Focus};

#[test]
fn empty_list_shows_only_the_placeholder() {
    let app = App::new();
    let rows = lines(&render(&app));
    assert_eq!(rows.iter().filter(|l| l.contains(EMPTY_MESSAGE)).count(), 1);
    assert!(!rows.iter().any(|l| l.contains("Remove")));
    assert!(rows.iter().any(|l| l.contains(TITLE)));
    assert!(rows.iter().any(|l| l.contains(INPUT_PLACEHOLDER)));
}

#[test]
fn one_row_per_wish_in_insertion_order() {
    let app = app_with(&["Apple", "Banana", "Cherry"]);
    let rows = lines(&render(&app));
    assert!(!rows.iter().any(|l| l.contains(EMPTY_MESSAGE)));
    assert_eq!(rows.iter().filter(|l| l.contains("Remove")).count(), 3);

    let pos = |needle: &str| rows.iter().position(|l| l.contains(needle)).unwrap();
    assert!(pos("Apple") < pos("Banana"));
    assert!(pos("Banana") < pos("Cherry"));
    // Text and its Remove control share a line.
    assert!(rows[pos("Banana")].contains("Remove"));
}

#[test]
fn duplicates_render_as_separate_rows() {
    let app = app_with(&["Same", "Same"]);
    let rows = lines(&render(&app));
    assert_eq!(rows.iter().filter(|l| l.contains("Same")).count(), 2);
}

#[test]
fn toggle_glyph_and_label_follow_mode() {
    let mut app = App::new();
    let rows = lines(&render(&app));
    assert!(rows.iter().any(|l| l.contains('☾')));
    assert!(rows[HEIGHT as usize - 1].contains("Switch to dark theme"));

    app.toggle_theme();
    let rows = lines(&render(&app));
    assert!(rows.iter().any(|l| l.contains('☀')));
    assert!(!rows.iter().any(|l| l.contains('☾')));
    assert!(rows[HEIGHT as usize - 1].contains("Switch to light theme"));
}

#[test]
fn colors_are_taken_from_the_active_palette() {
    let mut app = app_with(&["Apple"]);
    let layout = ScreenLayout::compute(Rect::new(0, 0, WIDTH, HEIGHT), &app);
    let row = layout.row(0).unwrap().area;

    for palette in [Palette::light(), Palette::dark()] {
        let buf = render(&app);
        assert_eq!(buf.cell((0, 0)).unwrap().bg, palette.bg);
        let corner = buf.cell((layout.container.x, layout.container.y)).unwrap();
        assert_eq!(corner.bg, palette.container_bg);
        assert_eq!(buf.cell((row.x, row.y)).unwrap().bg, palette.surface);
        app.toggle_theme();
    }
}

#[test]
fn long_wishes_wrap_inside_their_row() {
    let long = "word ".repeat(30);
    let app = app_with(&[long.trim_end(), "after"]);
    let layout = ScreenLayout::compute(Rect::new(0, 0, WIDTH, HEIGHT), &app);
    let first = layout.row(0).unwrap();
    assert!(first.area.height > 1);
    assert!(first.lines.iter().all(|l| l.chars().count() <= usize::from(first.text.width)));

    let rows = lines(&render(&app));
    let after = rows.iter().position(|l| l.contains("after")).unwrap();
    assert_eq!(after as u16, layout.row(1).unwrap().area.y);
}

#[test]
fn selected_row_is_marked_only_when_list_focused() {
    let mut app = app_with(&["Apple", "Banana"]);
    app.selected = 1;
    assert!(!lines(&render(&app)).iter().any(|l| l.contains('›')));

    app.focus = Focus::List;
    let rows = lines(&render(&app));
    let marked: Vec<&String> = rows.iter().filter(|l| l.contains('›')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Banana"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = app_with(&["Apple", "Banana"]);
    for (w, h) in [(1, 1), (10, 3), (20, 8)] {
        let mut term = ratatui::Terminal::new(ratatui::backend::TestBackend::new(w, h)).unwrap();
        term.draw(|f| wishlist::ui::ui(f, &app)).unwrap();
    }
}
