use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::fetch::{DEFAULT_CHANGELOG_URL, DEFAULT_SOURCE_LINK};

/// Site configuration, loaded from `vgk-docs.toml`.
///
/// Every field is optional in the file; omitted fields take the built-in
/// defaults, so an absent config file behaves exactly like an empty one.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Raw-file endpoint the changelog document is fetched from.
    pub changelog_url: String,

    /// External page linked from the fallback message.
    pub source_link: String,

    /// Request timeout for the changelog fetch.
    pub timeout_seconds: u64,

    /// Override for the preference file location.
    pub prefs_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            changelog_url: DEFAULT_CHANGELOG_URL.to_string(),
            source_link: DEFAULT_SOURCE_LINK.to_string(),
            timeout_seconds: 30,
            prefs_path: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, treating a missing file as the defaults.
    ///
    /// # Errors
    /// Returns an error only if an existing file cannot be read or parsed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = SiteConfig::load_or_default("does-not-exist.toml").unwrap();
        assert_eq!(config.changelog_url, DEFAULT_CHANGELOG_URL);
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.prefs_path.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_omitted_fields() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vgk-docs.toml");
        std::fs::write(&path, "timeout_seconds = 5\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.changelog_url, DEFAULT_CHANGELOG_URL);
        assert_eq!(config.source_link, DEFAULT_SOURCE_LINK);
    }

    #[test]
    fn malformed_file_is_a_config_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vgk-docs.toml");
        std::fs::write(&path, "timeout_seconds = \"soon\"\n").unwrap();

        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(crate::SiteError::ConfigParse(_))));
    }
}
