use std::path::PathBuf;

use site::AppState;

use crate::error::{CliError, Result};
use crate::store;

pub fn execute(key: &str, config_path: PathBuf) -> Result<()> {
    let (_, prefs) = store::open(&config_path)?;
    let state = AppState::load(&prefs);

    let text = i18n::translate_or_fallback(state.language, key)
        .ok_or_else(|| CliError::UnknownKey(key.to_string()))?;
    println!("{text}");
    Ok(())
}
