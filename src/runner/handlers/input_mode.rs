use crate::app::settings::KeyAction;
use crate::app::App;
use crate::input::{typed_char, KeyEvent};

/// Keys while the draft field has focus.
pub fn handle_input(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let km = &app.keymap;
    if km.is(KeyAction::Submit, &key) {
        app.submit_wish();
    } else if km.is(KeyAction::Backspace, &key) {
        app.draft.backspace();
    } else if km.is(KeyAction::DeleteChar, &key) {
        app.draft.delete();
    } else if km.is(KeyAction::CursorLeft, &key) {
        app.draft.move_left();
    } else if km.is(KeyAction::CursorRight, &key) {
        app.draft.move_right();
    } else if km.is(KeyAction::Home, &key) {
        app.draft.home();
    } else if km.is(KeyAction::End, &key) {
        app.draft.end();
    } else if let Some(c) = typed_char(&key) {
        app.draft.insert_char(c);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_input(app, press(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn typing_then_enter_adds_a_wish() {
        let mut app = App::new();
        type_str(&mut app, "Buy milk");
        handle_input(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.wishes.get(0), Some("Buy milk"));
        assert!(app.draft.is_empty());
    }

    #[test]
    fn list_bindings_are_plain_text_here() {
        let mut app = App::new();
        type_str(&mut app, "jkd");
        assert_eq!(app.draft.as_str(), "jkd");
    }

    #[test]
    fn editing_keys_move_and_delete() {
        let mut app = App::new();
        type_str(&mut app, "abc");
        handle_input(&mut app, press(KeyCode::Home)).unwrap();
        handle_input(&mut app, press(KeyCode::Delete)).unwrap();
        handle_input(&mut app, press(KeyCode::End)).unwrap();
        handle_input(&mut app, press(KeyCode::Backspace)).unwrap();
        assert_eq!(app.draft.as_str(), "b");
    }
}
