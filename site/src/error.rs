use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors for the imperative shell around the changelog core.
///
/// Everything the fetch path can produce collapses into one recoverable
/// condition for callers: the document is unavailable. No distinction is made
/// between timeouts, transport errors and server errors beyond what the
/// wrapped error carries for diagnostics.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Changelog request returned status {status} for {url}")]
    BadStatus { status: u16, url: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Preferences error: {0}")]
    Prefs(#[from] prefs::PrefsError),
}
