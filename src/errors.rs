use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading settings and building the application
/// state from them. Widget operations themselves never fail.
#[derive(Error, Debug)]
pub enum WishlistError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An explicitly requested settings file does not exist.
    #[error("settings file `{0}` does not exist")]
    MissingConfig(PathBuf),

    /// The settings file exists but is not valid TOML for our schema.
    #[error("failed to parse settings `{path}`: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A palette token was not a `#rrggbb` color.
    #[error("invalid color `{value}` for palette token `{token}`")]
    InvalidColor { token: String, value: String },

    /// A key binding string could not be parsed.
    #[error("invalid key binding `{0}`")]
    InvalidKey(String),

    /// A `[keys]` table entry names an action we do not know.
    #[error("unknown key action `{0}`")]
    UnknownAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let e = WishlistError::InvalidColor {
            token: "bg".into(),
            value: "blue".into(),
        };
        assert_eq!(e.to_string(), "invalid color `blue` for palette token `bg`");

        let e = WishlistError::MissingConfig(PathBuf::from("/nope/settings.toml"));
        assert!(e.to_string().contains("/nope/settings.toml"));
    }
}
