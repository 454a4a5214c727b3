use thiserror::Error;

/// Type alias for Result with `PrefsError`
pub type Result<T> = std::result::Result<T, PrefsError>;

/// Errors that can occur when working with the preference store
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Failed to read or write preferences file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preferences file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not determine a configuration directory for preferences")]
    NoConfigDir,
}
