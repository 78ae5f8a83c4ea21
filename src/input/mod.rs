//! Terminal event polling and translation into the events the app handles.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{typed_char, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
pub use mouse::{MouseButton, MouseEvent, MouseEventKind};

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Events the runner dispatches on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Release/repeat reports (Windows, kitty protocol) would double
            // every keystroke.
            Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
            Event::Mouse(m) => InputEvent::Mouse(m),
            Event::Paste(s) => InputEvent::Paste(s),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Blocks if none is pending; call `poll` first.
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}
