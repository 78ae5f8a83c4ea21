pub mod config_dirs;
pub mod keybinds;
pub mod model;
pub mod read_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_log_path, default_settings_path};
pub use keybinds::{KeyAction, KeyBinding, Keymap};
pub use model::{PaletteSettings, Settings};
pub use read_settings::{load_settings, parse_settings};
