use std::path::Path;

use prefs::FilePreferenceStore;
use site::SiteConfig;

use crate::error::Result;

/// Loads the site config and opens the preference store it points at.
pub fn open(config_path: &Path) -> Result<(SiteConfig, FilePreferenceStore)> {
    let config = SiteConfig::load_or_default(config_path)?;
    let store = match &config.prefs_path {
        Some(path) => FilePreferenceStore::open(path)?,
        None => FilePreferenceStore::open_default()?,
    };
    Ok((config, store))
}
