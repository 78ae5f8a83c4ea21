use serde::Deserialize;
use std::fmt;

/// Light or dark palette selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Glyph shown on the toggle control: the sun offers a switch to light
    /// while dark is active, the moon offers a switch to dark.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }

    /// Accessible label describing what pressing the toggle will do.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Switch to light theme",
            ThemeMode::Light => "Switch to dark theme",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        write!(f, "{}", s)
    }
}

/// Which surface receives typed keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    List,
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Focus::Input => "input",
            Focus::List => "list",
        };
        write!(f, "{}", s)
    }
}
