//! Theme preference: base light/dark mode plus a named palette.
//!
//! The palette names follow the PrimeReact theme directory names so the
//! stylesheet URL can be derived from them. Selecting a palette also selects
//! the base mode from the `light`/`dark` marker in its name.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Base colour mode, written to `<html data-theme>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Selectable component palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    #[default]
    #[serde(rename = "lara-light-blue")]
    LaraLightBlue,
    #[serde(rename = "lara-dark-blue")]
    LaraDarkBlue,
    #[serde(rename = "lara-light-indigo")]
    LaraLightIndigo,
    #[serde(rename = "lara-dark-indigo")]
    LaraDarkIndigo,
}

impl Palette {
    pub const ALL: [Self; 4] = [
        Self::LaraLightBlue,
        Self::LaraDarkBlue,
        Self::LaraLightIndigo,
        Self::LaraDarkIndigo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::LaraLightBlue => "lara-light-blue",
            Self::LaraDarkBlue => "lara-dark-blue",
            Self::LaraLightIndigo => "lara-light-indigo",
            Self::LaraDarkIndigo => "lara-dark-indigo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LaraLightBlue => "Lara Light Blue",
            Self::LaraDarkBlue => "Lara Dark Blue",
            Self::LaraLightIndigo => "Lara Light Indigo",
            Self::LaraDarkIndigo => "Lara Dark Indigo",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Base mode implied by the palette name.
    pub fn base_theme(self) -> Theme {
        if self.name().contains("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Stylesheet for this palette.
    pub fn stylesheet_href(self) -> String {
        format!("https://unpkg.com/primereact/resources/themes/{}/theme.css", self.name())
    }
}

/// Persisted theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub theme: Theme,
    #[serde(rename = "primeTheme")]
    pub palette: Palette,
}

impl ThemeState {
    /// Initial state when nothing is persisted: default palette, base mode
    /// following the system preference.
    pub fn from_system(prefers_dark: bool) -> Self {
        Self {
            theme: if prefers_dark { Theme::Dark } else { Theme::Light },
            palette: Palette::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.theme = palette.base_theme();
    }
}
