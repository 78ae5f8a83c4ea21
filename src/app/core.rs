use tracing::debug;

use super::draft::Draft;
use super::settings::{Keymap, Settings};
use super::types::{Focus, ThemeMode};
use super::wishes::WishList;
use crate::errors::WishlistError;
use crate::ui::theme::Theme;

/// All state of the wish-list widget.
pub struct App {
    pub wishes: WishList,
    pub draft: Draft,
    pub theme: Theme,
    pub focus: Focus,
    /// Highlighted row while the list has focus. Kept within bounds by the
    /// operations below.
    pub selected: usize,
    pub keymap: Keymap,
    pub mouse_enabled: bool,
    pub trim_on_submit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            wishes: WishList::new(),
            draft: Draft::new(),
            theme: Theme::default(),
            focus: Focus::Input,
            selected: 0,
            keymap: Keymap::default(),
            mouse_enabled: true,
            trim_on_submit: false,
        }
    }

    /// Build the initial state from user settings: theme mode and palette
    /// overrides, key bindings and submit behavior.
    pub fn with_settings(settings: &Settings) -> Result<Self, WishlistError> {
        let light = settings.palette.light.apply(crate::ui::theme::Palette::light())?;
        let dark = settings.palette.dark.apply(crate::ui::theme::Palette::dark())?;
        let keymap = Keymap::default().with_overrides(&settings.keys)?;
        Ok(App {
            theme: Theme::with_palettes(settings.theme, light, dark),
            keymap,
            mouse_enabled: settings.mouse_enabled,
            trim_on_submit: settings.trim_on_submit,
            ..App::new()
        })
    }

    /// Append the draft to the list and clear it.
    ///
    /// A draft that is empty after trimming is ignored and left as is. The
    /// stored text is the draft exactly as typed unless `trim_on_submit` is
    /// set. Returns whether a wish was added.
    pub fn submit_wish(&mut self) -> bool {
        if self.draft.is_blank() {
            return false;
        }
        let text = self.draft.take();
        let wish = if self.trim_on_submit {
            text.trim().to_string()
        } else {
            text
        };
        self.wishes.push(wish);
        // Bring the new row into view.
        self.selected = self.wishes.len() - 1;
        debug!(len = self.wishes.len(), "wish added");
        true
    }

    /// Remove the wish at `index`. Out-of-range indices are ignored.
    pub fn remove_wish(&mut self, index: usize) -> Option<String> {
        let removed = self.wishes.remove(index)?;
        if self.wishes.is_empty() {
            self.selected = 0;
            self.focus = Focus::Input;
        } else if index < self.selected {
            // Keep the highlight on the same wish.
            self.selected -= 1;
        } else if self.selected >= self.wishes.len() {
            self.selected = self.wishes.len() - 1;
        }
        debug!(index, len = self.wishes.len(), "wish removed");
        Some(removed)
    }

    /// Flip between light and dark and return the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.theme.toggle();
        debug!(%mode, "theme toggled");
        mode
    }

    /// Move focus to the other surface. The list only takes focus when it
    /// has rows.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.wishes.is_empty() => Focus::List,
            _ => Focus::Input,
        };
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.wishes.len() {
            self.selected += 1;
        }
    }

    /// Remove the highlighted row.
    pub fn remove_selected(&mut self) -> Option<String> {
        self.remove_wish(self.selected)
    }
}
