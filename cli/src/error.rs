use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Site error: {0}")]
    Site(#[from] site::SiteError),

    #[error("Preferences error: {0}")]
    Prefs(#[from] prefs::PrefsError),

    #[error("Language error: {0}")]
    Language(#[from] i18n::ParseLanguageError),

    #[error("Theme error: {0}")]
    Theme(#[from] site::ParseThemeError),

    #[error("No translation found for key: {0}")]
    UnknownKey(String),

    #[error("Changelog document unavailable: {0}")]
    DocumentUnavailable(String),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Site(err) => err.to_string(),
            Self::Prefs(err) => err.to_string(),
            Self::Language(err) => err.to_string(),
            Self::Theme(err) => err.to_string(),
            Self::UnknownKey(key) => format!("No translation found for key: {key}"),
            Self::DocumentUnavailable(reason) => {
                format!("Changelog document unavailable: {reason}")
            }
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
