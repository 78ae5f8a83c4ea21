use crate::app::settings::KeyAction;
use crate::app::{App, Focus};
use crate::input::{typed_char, KeyEvent};

/// Keys while the list has focus.
pub fn handle_list(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let km = &app.keymap;
    if km.is(KeyAction::Up, &key) {
        app.select_prev();
    } else if km.is(KeyAction::Down, &key) {
        app.select_next();
    } else if km.is(KeyAction::Remove, &key) {
        app.remove_selected();
    } else if let Some(c) = typed_char(&key) {
        // Any other character starts a new wish.
        app.focus = Focus::Input;
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

    fn list_app() -> App {
        let mut app = App::new();
        app.wishes = ["A", "B", "C"].into_iter().collect();
        app.focus = Focus::List;
        app
    }

    #[test]
    fn delete_removes_selected_row() {
        let mut app = list_app();
        handle_list(&mut app, press(KeyCode::Down)).unwrap();
        handle_list(&mut app, press(KeyCode::Delete)).unwrap();
        assert_eq!(app.wishes.iter().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn vim_keys_move_selection() {
        let mut app = list_app();
        handle_list(&mut app, press(KeyCode::Char('j'))).unwrap();
        handle_list(&mut app, press(KeyCode::Char('j'))).unwrap();
        handle_list(&mut app, press(KeyCode::Char('k'))).unwrap();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn other_characters_jump_to_the_input() {
        let mut app = list_app();
        handle_list(&mut app, press(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.draft.as_str(), "x");
        assert_eq!(app.wishes.len(), 3);
    }
}
