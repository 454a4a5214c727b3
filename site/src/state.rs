//! Language/theme application state with persistence behind the prefs port.

use std::fmt;
use std::str::FromStr;

use i18n::Language;
use prefs::PreferenceStore;
use thiserror::Error;

/// Preference key the language choice is persisted under.
pub const LANGUAGE_KEY: &str = "vgk-lang";

/// Preference key the theme choice is persisted under.
pub const THEME_KEY: &str = "vgk-theme";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct ParseThemeError(String);

/// Color theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon the theme toggle shows: the moon while light, the sun while dark.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// The page's whole mutable state: current language and theme.
///
/// Toggles are pure; persistence happens only through [`AppState::persist`]
/// with an injected store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    pub language: Language,
    pub theme: Theme,
}

impl AppState {
    /// Reads both preference keys once; missing or unparseable values fall
    /// back to the defaults (English, light).
    #[must_use]
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let language = store
            .get(LANGUAGE_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        let theme = store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Self { language, theme }
    }

    #[must_use]
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    #[must_use]
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    #[must_use]
    pub fn with_language_toggled(self) -> Self {
        self.with_language(self.language.toggled())
    }

    #[must_use]
    pub fn with_theme_toggled(self) -> Self {
        self.with_theme(self.theme.toggled())
    }

    /// Writes both keys to the store.
    ///
    /// # Errors
    /// Propagates store write failures.
    pub fn persist(&self, store: &mut dyn PreferenceStore) -> prefs::Result<()> {
        store.set(LANGUAGE_KEY, self.language.code())?;
        store.set(THEME_KEY, self.theme.as_str())?;
        Ok(())
    }
}
