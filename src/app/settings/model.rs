use serde::Deserialize;
use std::collections::HashMap;

use crate::app::types::ThemeMode;
use crate::ui::theme::PaletteOverrides;

/// User settings as read from `settings.toml`. Every key is optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Theme active at startup.
    pub theme: ThemeMode,
    pub mouse_enabled: bool,
    /// Store the trimmed draft instead of the text exactly as typed.
    pub trim_on_submit: bool,
    pub palette: PaletteSettings,
    /// Action name → key specs, replacing that action's defaults.
    pub keys: HashMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            mouse_enabled: true,
            trim_on_submit: false,
            palette: PaletteSettings::default(),
            keys: HashMap::new(),
        }
    }
}

/// Per-mode palette token overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteSettings {
    pub light: PaletteOverrides,
    pub dark: PaletteOverrides,
}
