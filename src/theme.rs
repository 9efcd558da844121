//! Color theme handling.

use serde::{Deserialize, Serialize};

use crate::storage::{keys, STORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stored representation, matching the `theme` storage key values.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Display name, as shown in the palette.
    pub fn title(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// CSS class applied to the app root.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    /// Resolve the startup theme: the stored value wins, otherwise the OS
    /// preference, otherwise dark.
    pub fn load() -> Theme {
        if let Some(theme) = STORE.read().get(keys::THEME).and_then(Theme::parse) {
            return theme;
        }
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Theme::parse("blue"), None);
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("Dark"), None);
    }

    #[test]
    fn test_serde_shape() {
        assert_eq!(serde_json::to_string(&Theme::Light).ok().as_deref(), Some("\"light\""));
        let parsed: Theme = serde_json::from_str("\"dark\"").expect("valid theme json");
        assert_eq!(parsed, Theme::Dark);
    }
}
