//! Light/dark theme flag.

use serde::{Deserialize, Serialize};

/// Visual mode of the page. Owned by the page shell, flipped only by the
/// toggle control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Beige palette, day particles.
    #[default]
    Light,
    /// Indigo palette, night sparkles.
    Dark,
}

impl Theme {
    /// Initial theme from the OS `prefers-color-scheme` answer.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// True for [`Theme::Dark`].
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class carried by the document root while this theme is active.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }

    /// Accessible label for the toggle: names the mode a click switches to.
    pub fn label(self) -> &'static str {
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
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn only_dark_carries_a_root_class() {
        assert_eq!(Theme::Light.root_class(), None);
        assert_eq!(Theme::Dark.root_class(), Some("dark"));
    }

    #[test]
    fn initial_theme_follows_preference() {
        assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
        assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
    }
}
