//! Palettes and the theme context handed to every draw function.
//!
//! There is no process-wide style state: whoever draws receives a `&Theme`
//! and derives its styles from `Theme::palette()` for the current frame.

use ratatui::style::Color;
use serde::Deserialize;

use crate::app::types::ThemeMode;
use crate::errors::WishlistError;

/// Named color tokens for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Page background around the container.
    pub bg: Color,
    /// Default text color.
    pub text: Color,
    /// Container background.
    pub container_bg: Color,
    /// Row and toggle-button background.
    pub surface: Color,
    pub surface_text: Color,
    pub input_border: Color,
    pub input_bg: Color,
    pub input_text: Color,
    /// Placeholder and empty-state text.
    pub muted: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub danger: Color,
}

impl Palette {
    pub const fn light() -> Self {
        Self {
            bg: rgb(0xf7fafc),
            text: rgb(0x1a202c),
            container_bg: rgb(0xffffff),
            surface: rgb(0xedf2f7),
            surface_text: rgb(0x2d3748),
            input_border: rgb(0xe2e8f0),
            input_bg: rgb(0xf7fafc),
            input_text: rgb(0x1a202c),
            muted: rgb(0x718096),
            accent: rgb(0x4299e1),
            on_accent: rgb(0xffffff),
            danger: rgb(0xe53e3e),
        }
    }

    pub const fn dark() -> Self {
        Self {
            bg: rgb(0x1a202c),
            text: rgb(0xe2e8f0),
            container_bg: rgb(0x2d3748),
            surface: rgb(0x4a5568),
            surface_text: rgb(0xf7fafc),
            input_border: rgb(0x4a5568),
            input_bg: rgb(0x4a5568),
            input_text: rgb(0xf7fafc),
            muted: rgb(0xa0aec0),
            accent: rgb(0x4299e1),
            on_accent: rgb(0xffffff),
            danger: rgb(0xe53e3e),
        }
    }

    /// The three page-level tokens: background, text, container background.
    pub fn page_tokens(&self) -> [Color; 3] {
        [self.bg, self.text, self.container_bg]
    }
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Optional per-token overrides as written in the settings file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverrides {
    pub bg: Option<String>,
    pub text: Option<String>,
    pub container_bg: Option<String>,
    pub surface: Option<String>,
    pub surface_text: Option<String>,
    pub input_border: Option<String>,
    pub input_bg: Option<String>,
    pub input_text: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub on_accent: Option<String>,
    pub danger: Option<String>,
}

impl PaletteOverrides {
    /// Return `base` with every overridden token replaced.
    pub fn apply(&self, base: Palette) -> Result<Palette, WishlistError> {
        fn pick(token: &str, v: &Option<String>, cur: Color) -> Result<Color, WishlistError> {
            v.as_deref().map_or(Ok(cur), |s| parse_hex(token, s))
        }
        Ok(Palette {
            bg: pick("bg", &self.bg, base.bg)?,
            text: pick("text", &self.text, base.text)?,
            container_bg: pick("container_bg", &self.container_bg, base.container_bg)?,
            surface: pick("surface", &self.surface, base.surface)?,
            surface_text: pick("surface_text", &self.surface_text, base.surface_text)?,
            input_border: pick("input_border", &self.input_border, base.input_border)?,
            input_bg: pick("input_bg", &self.input_bg, base.input_bg)?,
            input_text: pick("input_text", &self.input_text, base.input_text)?,
            muted: pick("muted", &self.muted, base.muted)?,
            accent: pick("accent", &self.accent, base.accent)?,
            on_accent: pick("on_accent", &self.on_accent, base.on_accent)?,
            danger: pick("danger", &self.danger, base.danger)?,
        })
    }
}

/// Parse `#rrggbb` (the leading `#` is optional).
pub fn parse_hex(token: &str, s: &str) -> Result<Color, WishlistError> {
    let invalid = || WishlistError::InvalidColor {
        token: token.to_string(),
        value: s.to_string(),
    };
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let v = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    Ok(rgb(v))
}

/// Current mode plus both palettes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    mode: ThemeMode,
    light: Palette,
    dark: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }

    pub fn with_palettes(mode: ThemeMode, light: Palette, dark: Palette) -> Self {
        Self { mode, light, dark }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and return the new one.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Palette for the current mode.
    pub fn palette(&self) -> &Palette {
        match self.mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}
