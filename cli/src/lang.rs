use std::path::PathBuf;

use i18n::Language;
use site::AppState;

use crate::error::Result;
use crate::store;
use crate::ui;

pub fn execute(set: Option<String>, show: bool, config_path: PathBuf) -> Result<()> {
    let (_, mut prefs) = store::open(&config_path)?;
    let state = AppState::load(&prefs);

    if show {
        println!("{}", state.language.code());
        return Ok(());
    }

    let next = match set {
        Some(code) => state.with_language(code.parse::<Language>()?),
        None => state.with_language_toggled(),
    };
    next.persist(&mut prefs)?;

    ui::success_message(&format!(
        "Language set to {} (toggle now shows {})",
        next.language.code(),
        next.language.toggle_label()
    ));
    Ok(())
}
