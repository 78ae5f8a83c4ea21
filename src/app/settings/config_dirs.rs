use directories_next::ProjectDirs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.toml";
const LOG_FILE: &str = "wishlist.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "wishlist")
}

/// Per-user configuration directory, e.g. `~/.config/wishlist` on Linux.
fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|p| p.config_dir().to_path_buf())
}

/// Where the settings file is looked up when `--config` is not given.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}

/// Where logs go when `--log-file` is not given.
pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|p| p.data_local_dir().join(LOG_FILE))
}
