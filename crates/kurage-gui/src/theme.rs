//! Theme loading and resolution.
//!
//! Each theme is a single TOML file containing both dark and light
//! variants. Supports embedded defaults and user-provided themes from
//! the platform config dir's `themes/` folder.

mod catalog;
mod colors;

// Re-export everything so `crate::theme::*` paths remain unchanged.
pub use catalog::*;
pub use colors::*;

use iced::Theme;

/// Embedded default theme TOML source (contains both dark and light).
pub(crate) const DEFAULT_THEME_TOML: &str = include_str!("../assets/themes/default.toml");

/// Embedded Lagoon theme.
pub(crate) const LAGOON_THEME_TOML: &str = include_str!("../assets/themes/lagoon.toml");

/// A fully loaded theme with both appearance variants.
#[derive(Debug, Clone)]
pub struct KurageTheme {
    pub name: String,
    pub dark: ColorScheme,
    pub light: ColorScheme,
}

impl KurageTheme {
    /// Load a theme from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let file: ThemeFile =
            toml::from_str(toml_str).map_err(|e| format!("theme parse error: {e}"))?;
        Ok(Self {
            name: file.meta.name.clone(),
            dark: ColorScheme::from_variant(&file.dark),
            light: ColorScheme::from_variant(&file.light),
        })
    }

    /// Load the embedded default theme.
    pub fn default_theme() -> Self {
        Self::from_toml(DEFAULT_THEME_TOML).expect("embedded default theme is valid TOML")
    }

    /// Get the color scheme for a resolved mode (Dark or Light).
    pub fn colors(&self, mode: ThemeMode) -> &ColorScheme {
        match mode {
            ThemeMode::Light => &self.light,
            // Dark is the fallback for both Dark and System.
            _ => &self.dark,
        }
    }

    /// Build the iced Theme for a given mode.
    pub fn iced_theme(&self, mode: ThemeMode) -> Theme {
        build_theme(self.colors(mode))
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Discover all available themes: embedded defaults + user themes from disk.
pub fn available_themes() -> Vec<KurageTheme> {
    let mut themes = vec![
        KurageTheme::default_theme(),
        KurageTheme::from_toml(LAGOON_THEME_TOML).expect("embedded Lagoon theme is valid TOML"),
    ];

    // Scan user themes directory.
    if let Some(user_themes) = user_themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_themes) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|e| e == "toml") {
                    match std::fs::read_to_string(&path) {
                        Ok(content) => match KurageTheme::from_toml(&content) {
                            Ok(theme) => themes.push(theme),
                            Err(e) => {
                                tracing::warn!("Skipping theme {}: {e}", path.display());
                            }
                        },
                        Err(e) => {
                            tracing::warn!("Cannot read {}: {e}", path.display());
                        }
                    }
                }
            }
        }
    }

    themes
}

/// Find a theme by name from the available themes.
pub fn find_theme(name: &str) -> Option<KurageTheme> {
    available_themes().into_iter().find(|t| t.name == name)
}

/// Path to the user themes directory.
fn user_themes_dir() -> Option<std::path::PathBuf> {
    kurage_core::config::project_dirs().map(|dirs| dirs.config_dir().join("themes"))
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Kurage",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.tertiary,
            warning: cs.tertiary,
            danger: cs.error,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_themes_parse() {
        let theme = KurageTheme::default_theme();
        assert_eq!(theme.name, "Kurage");
        let lagoon = KurageTheme::from_toml(LAGOON_THEME_TOML).unwrap();
        assert_eq!(lagoon.name, "Lagoon");
    }
}
