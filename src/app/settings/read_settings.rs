use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::config_dirs::default_settings_path;
use super::model::Settings;
use crate::errors::WishlistError;

/// Parse settings from TOML text. `origin` is only used for error messages.
pub fn parse_settings(s: &str, origin: &Path) -> Result<Settings, WishlistError> {
    toml::from_str(s).map_err(|source| WishlistError::ConfigParse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Load settings from `explicit` if given, otherwise from the default
/// location. A missing default file yields the built-in defaults; a missing
/// explicit file is an error.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, WishlistError> {
    let path = match explicit {
        Some(p) if !p.exists() => return Err(WishlistError::MissingConfig(p.to_path_buf())),
        Some(p) => p.to_path_buf(),
        None => match default_settings_path() {
            Some(p) if p.exists() => p,
            other => {
                debug!(path = ?other, "no settings file, using defaults");
                return Ok(Settings::default());
            }
        },
    };
    let text = fs::read_to_string(&path)?;
    let settings = parse_settings(&text, &path)?;
    info!(path = %path.display(), theme = %settings.theme, "loaded settings");
    Ok(settings)
}
