use serde::{Deserialize, Serialize};

/// Key under which the chosen theme is kept in local storage.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// A stored choice always wins over the system color scheme.
    pub fn initial(stored: Option<Theme>, prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    /// Theme for the current render. Before hydration finishes this is always
    /// the default, so the server markup and the first client render agree; the
    /// stored choice and system preference apply as a post-hydration update.
    pub fn resolve(hydrated: bool, stored: Option<Theme>, prefers_dark: bool) -> Self {
        if hydrated {
            Self::initial(stored, prefers_dark)
        } else {
            Theme::default()
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_theme() {
        assert_eq!(Theme::initial(None, false), Theme::Light);
        assert_eq!(Theme::initial(None, true), Theme::Dark);
        assert_eq!(Theme::initial(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::initial(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn test_first_render_ignores_storage() {
        assert_eq!(Theme::resolve(false, Some(Theme::Dark), true), Theme::Light);
        assert_eq!(Theme::resolve(false, None, true), Theme::Light);
        assert_eq!(Theme::resolve(true, Some(Theme::Dark), false), Theme::Dark);
        assert_eq!(Theme::resolve(true, None, true), Theme::Dark);
        assert_eq!(Theme::resolve(true, Some(Theme::Light), true), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(Theme::Light.toggled().is_dark());
        assert_eq!(Theme::Dark.class(), "dark");
    }

    #[test]
    fn test_stored_representation() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Option<Theme>>("\"light\"").unwrap(),
            Some(Theme::Light)
        );
        assert_eq!(serde_json::from_str::<Option<Theme>>("null").unwrap(), None);
    }
}
