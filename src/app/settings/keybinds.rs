// Centralised key bindings for the application.
//
// Handlers ask the `Keymap` whether a key event triggers a named action
// instead of matching raw `KeyCode` patterns. The defaults below can be
// replaced per action from the `[keys]` table of the settings file.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::WishlistError;
use crate::input::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a key can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Quit,
    ToggleTheme,
    FocusNext,
    Submit,
    Backspace,
    DeleteChar,
    CursorLeft,
    CursorRight,
    Home,
    End,
    Up,
    Down,
    Remove,
}

impl KeyAction {
    pub const ALL: [KeyAction; 13] = [
        KeyAction::Quit,
        KeyAction::ToggleTheme,
        KeyAction::FocusNext,
        KeyAction::Submit,
        KeyAction::Backspace,
        KeyAction::DeleteChar,
        KeyAction::CursorLeft,
        KeyAction::CursorRight,
        KeyAction::Home,
        KeyAction::End,
        KeyAction::Up,
        KeyAction::Down,
        KeyAction::Remove,
    ];

    /// Name used in the settings file.
    pub fn name(self) -> &'static str {
        match self {
            KeyAction::Quit => "quit",
            KeyAction::ToggleTheme => "toggle_theme",
            KeyAction::FocusNext => "focus_next",
            KeyAction::Submit => "submit",
            KeyAction::Backspace => "backspace",
            KeyAction::DeleteChar => "delete_char",
            KeyAction::CursorLeft => "cursor_left",
            KeyAction::CursorRight => "cursor_right",
            KeyAction::Home => "home",
            KeyAction::End => "end",
            KeyAction::Up => "up",
            KeyAction::Down => "down",
            KeyAction::Remove => "remove",
        }
    }

    fn defaults(self) -> &'static [&'static str] {
        match self {
            KeyAction::Quit => &["Esc", "Ctrl+c"],
            KeyAction::ToggleTheme => &["F2", "Ctrl+t"],
            KeyAction::FocusNext => &["Tab", "BackTab"],
            KeyAction::Submit => &["Enter"],
            KeyAction::Backspace => &["Backspace"],
            KeyAction::DeleteChar => &["Delete"],
            KeyAction::CursorLeft => &["Left"],
            KeyAction::CursorRight => &["Right"],
            KeyAction::Home => &["Home"],
            KeyAction::End => &["End"],
            KeyAction::Up => &["Up", "k"],
            KeyAction::Down => &["Down", "j"],
            KeyAction::Remove => &["Delete", "d", "Enter"],
        }
    }
}

impl FromStr for KeyAction {
    type Err = WishlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyAction::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| WishlistError::UnknownAction(s.to_string()))
    }
}

/// A single key chord such as `Ctrl+t` or `F2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Terminals report uppercase letters and BackTab with SHIFT set; the
    /// character itself already carries that information.
    fn normalized(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
        match code {
            KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        }
    }

    pub fn matches(&self, ev: &KeyEvent) -> bool {
        self.code == ev.code
            && Self::normalized(self.code, self.modifiers)
                == Self::normalized(ev.code, ev.modifiers)
    }
}

impl FromStr for KeyBinding {
    type Err = WishlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WishlistError::InvalidKey(s.to_string());
        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        // "Ctrl++" binds the plus key itself.
        if s.ends_with("++") {
            parts.truncate(parts.len().saturating_sub(2));
            parts.push("+");
        }
        let key = parts.pop().filter(|k| !k.is_empty()).ok_or_else(invalid)?;
        for m in parts {
            match m.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            }
        }

        let mut chars = key.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => KeyCode::Char(c),
            _ => match key.to_ascii_lowercase().as_str() {
                "enter" | "return" => KeyCode::Enter,
                "esc" | "escape" => KeyCode::Esc,
                "tab" => KeyCode::Tab,
                "backtab" => KeyCode::BackTab,
                "backspace" => KeyCode::Backspace,
                "delete" | "del" => KeyCode::Delete,
                "up" => KeyCode::Up,
                "down" => KeyCode::Down,
                "left" => KeyCode::Left,
                "right" => KeyCode::Right,
                "home" => KeyCode::Home,
                "end" => KeyCode::End,
                "pageup" => KeyCode::PageUp,
                "pagedown" => KeyCode::PageDown,
                "space" => KeyCode::Char(' '),
                other => match other.strip_prefix('f').map(str::parse::<u8>) {
                    Some(Ok(n)) if (1..=12).contains(&n) => KeyCode::F(n),
                    _ => return Err(invalid()),
                },
            },
        };
        Ok(KeyBinding::new(code, modifiers))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "Alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "Shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Esc => write!(f, "Esc"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::BackTab => write!(f, "BackTab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Del"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PgUp"),
            KeyCode::PageDown => write!(f, "PgDn"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Action → bindings table.
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<KeyAction, Vec<KeyBinding>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let bindings = KeyAction::ALL
            .into_iter()
            .map(|a| {
                let keys: Vec<KeyBinding> = a
                    .defaults()
                    .iter()
                    .filter_map(|s| s.parse::<KeyBinding>().ok())
                    .collect();
                (a, keys)
            })
            .collect();
        Self { bindings }
    }
}

impl Keymap {
    /// Replace the bindings of every action named in `overrides`.
    pub fn with_overrides(
        mut self,
        overrides: &HashMap<String, Vec<String>>,
    ) -> Result<Self, WishlistError> {
        for (name, keys) in overrides {
            let action: KeyAction = name.parse()?;
            let parsed = keys
                .iter()
                .map(|k| k.parse::<KeyBinding>())
                .collect::<Result<Vec<KeyBinding>, _>>()?;
            self.bindings.insert(action, parsed);
        }
        Ok(self)
    }

    pub fn is(&self, action: KeyAction, ev: &KeyEvent) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|k| k.matches(ev)))
    }

    pub fn bindings(&self, action: KeyAction) -> &[KeyBinding] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First binding of `action` rendered for the help bar.
    pub fn hint(&self, action: KeyAction) -> String {
        self.bindings(action)
            .first()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parses_modifiers_and_named_keys() {
        let b: KeyBinding = "Ctrl+t".parse().unwrap();
        assert_eq!(b, KeyBinding::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        let b: KeyBinding = "F2".parse().unwrap();
        assert_eq!(b.code, KeyCode::F(2));
        let b: KeyBinding = "alt+Enter".parse().unwrap();
        assert_eq!(b, KeyBinding::new(KeyCode::Enter, KeyModifiers::ALT));
        let b: KeyBinding = "Ctrl++".parse().unwrap();
        assert_eq!(b, KeyBinding::new(KeyCode::Char('+'), KeyModifiers::CONTROL));
    }

    #[test]
    fn rejects_garbage() {
        assert!("Hyper+x".parse::<KeyBinding>().is_err());
        assert!("F13".parse::<KeyBinding>().is_err());
        assert!("".parse::<KeyBinding>().is_err());
        assert!("Ctrl+".parse::<KeyBinding>().is_err());
    }

    #[test]
    fn shift_is_ignored_for_characters() {
        let km = Keymap::default();
        assert!(km.is(KeyAction::FocusNext, &key(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(km.is(KeyAction::ToggleTheme, &key(KeyCode::Char('t'), KeyModifiers::CONTROL)));
        assert!(!km.is(KeyAction::ToggleTheme, &key(KeyCode::Char('t'), KeyModifiers::NONE)));
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut o = HashMap::new();
        o.insert("toggle_theme".to_string(), vec!["F9".to_string()]);
        let km = Keymap::default().with_overrides(&o).unwrap();
        assert!(km.is(KeyAction::ToggleTheme, &key(KeyCode::F(9), KeyModifiers::NONE)));
        assert!(!km.is(KeyAction::ToggleTheme, &key(KeyCode::F(2), KeyModifiers::NONE)));
        assert_eq!(km.hint(KeyAction::ToggleTheme), "F9");
    }

    #[test]
    fn unknown_action_is_an_error() {
        let mut o = HashMap::new();
        o.insert("launch_rocket".to_string(), vec!["r".to_string()]);
        let err = Keymap::default().with_overrides(&o).unwrap_err();
        assert!(matches!(err, WishlistError::UnknownAction(ref a) if a == "launch_rocket"));
    }
}
