pub use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
