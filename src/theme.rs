use serde::{Deserialize, Serialize};

/// Local storage key for the user's explicit choice.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// A stored preference always beats the system setting.
pub fn resolve_theme(stored: Option<Theme>, prefers_dark: bool) -> Theme {
    stored.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_stored_choice() {
        assert_eq!(resolve_theme(Some(Theme::Light), true), Theme::Light);
        assert_eq!(resolve_theme(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn test_resolve_falls_back_to_system() {
        assert_eq!(resolve_theme(None, true), Theme::Dark);
        assert_eq!(resolve_theme(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_stored_format() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Option<Theme>>("\"light\"").unwrap(),
            Some(Theme::Light)
        );
    }
}
