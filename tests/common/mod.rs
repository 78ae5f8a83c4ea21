#![allow(dead_code)]

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use wishlist::input::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use wishlist::{ui, App};

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 30;

/// Draw one frame of `app` into an off-screen buffer.
pub fn render(app: &App) -> Buffer {
    let mut term = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    term.draw(|f| ui::ui(f, app)).unwrap();
    term.backend().buffer().clone()
}

/// The buffer as one string per row.
pub fn lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
                .collect()
        })
        .collect()
}

pub fn app_with(wishes: &[&str]) -> App {
    let mut app = App::new();
    app.wishes = wishes.iter().copied().collect();
    app
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
