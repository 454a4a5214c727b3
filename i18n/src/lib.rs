//! Display languages and the static translation catalog for the docs page.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

mod catalog;

pub use catalog::{translate, translate_or_fallback};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown language code: {0}")]
pub struct ParseLanguageError(String);

/// A display language of the docs page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    /// The other language; the page offers exactly two.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Vi,
            Self::Vi => Self::En,
        }
    }

    /// Lowercase ISO code, as persisted and as set on the document root.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }

    /// Label the language toggle shows: the language you would switch to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::En => "VI",
            Self::Vi => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "vi" => Ok(Self::Vi),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}
