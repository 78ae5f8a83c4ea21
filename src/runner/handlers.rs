//! Split handlers: thin wrapper delegating to submodules per focus.

pub mod input_mode;
pub mod list_mode;
pub mod mouse;

pub use input_mode::handle_input;
pub use list_mode::handle_list;
pub use mouse::handle_mouse;

use crate::app::settings::KeyAction;
use crate::app::{App, Focus};
use crate::input::{typed_char, KeyEvent};

/// Top-level key handler. Global bindings first, then the focused surface.
/// Plain characters always reach the draft while it has focus, even when a
/// global action is bound to them. Returns `Ok(true)` when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if app.focus == Focus::Input && typed_char(&key).is_some() {
        return handle_input(app, key);
    }
    if app.keymap.is(KeyAction::Quit, &key) {
        return Ok(true);
    }
    if app.keymap.is(KeyAction::ToggleTheme, &key) {
        app.toggle_theme();
        return Ok(false);
    }
    if app.keymap.is(KeyAction::FocusNext, &key) {
        app.focus_next();
        return Ok(false);
    }
    match app.focus {
        Focus::Input => handle_input(app, key),
        Focus::List => handle_list(app, key),
    }
}

/// Pasted text goes into the draft at the cursor. Line breaks become spaces
/// since a wish is a single line of input.
pub fn handle_paste(app: &mut App, text: &str) {
    app.focus = Focus::Input;
    app.draft.insert_str(&text.replace(['\r', '\n'], " "));
}
