//! Light/dark theme preference and its controller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::preferences::Preferences;

/// Display mode for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the `data-theme` attribute value, which is also the stored value.
    pub fn attribute_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored or attribute value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Emoji shown beside the toggle.
    pub fn badge(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    /// Glyph drawn on the toggle's slider.
    pub fn slider_glyph(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.attribute_value())
    }
}

/// Holds the in-memory theme and writes every change through to storage.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeController {
    current: Theme,
    prefs: Preferences,
}

impl ThemeController {
    /// Reads the stored theme once, defaulting to light.
    pub fn load(prefs: Preferences) -> Self {
        let current = initial_theme(&prefs);
        debug!(theme = %current, "Loaded theme preference");
        Self { current, prefs }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists it. Returns the new theme.
    ///
    /// The in-memory value changes even when the write fails.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        let persisted = self.prefs.set_theme(self.current);
        info!(theme = %self.current, persisted, "Theme toggled");
        self.current
    }
}

/// Stored theme, or light when nothing usable is stored.
pub fn initial_theme(prefs: &Preferences) -> Theme {
    prefs.theme().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::THEME_KEY;

    #[test]
    fn test_parse_and_attribute_agree() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.attribute_value()), Some(theme));
        }
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(" dark\n"), Some(Theme::Dark));
    }

    #[test]
    fn test_default_is_light_without_stored_value() {
        let controller = ThemeController::load(Preferences::in_memory());
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn test_loads_stored_dark() {
        let prefs = Preferences::in_memory();
        prefs.write(THEME_KEY, "dark");
        assert_eq!(ThemeController::load(prefs).current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_and_persists_each_step() {
        let prefs = Preferences::in_memory();
        let mut controller = ThemeController::load(prefs.clone());
        let original = controller.current();

        let first = controller.toggle();
        assert_eq!(first, original.toggled());
        assert_eq!(prefs.theme(), Some(first));

        let second = controller.toggle();
        assert_eq!(second, original);
        assert_eq!(prefs.theme(), Some(second));
        assert_eq!(prefs.read(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_serde_lowercase() {
        let encoded = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(encoded, "\"dark\"");
    }
}
