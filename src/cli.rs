use clap::Parser;
use std::path::PathBuf;

use crate::app::settings::Settings;
use crate::app::ThemeMode;

/// A terminal wish list with a light/dark theme toggle.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "wishlist", version, about)]
pub struct Cli {
    /// Theme to start with (overrides the settings file).
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Settings file to read instead of the per-user default.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not capture the mouse.
    #[arg(long)]
    pub no_mouse: bool,

    /// Write logs here instead of the per-user data directory.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over values from the settings file.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if self.no_mouse {
            settings.mouse_enabled = false;
        }
    }
}
