use std::path::PathBuf;

use site::{AppState, Theme};

use crate::error::Result;
use crate::store;
use crate::ui;

pub fn execute(set: Option<String>, show: bool, config_path: PathBuf) -> Result<()> {
    let (_, mut prefs) = store::open(&config_path)?;
    let state = AppState::load(&prefs);

    if show {
        println!("{}", state.theme);
        return Ok(());
    }

    let next = match set {
        Some(name) => state.with_theme(name.parse::<Theme>()?),
        None => state.with_theme_toggled(),
    };
    next.persist(&mut prefs)?;

    ui::success_message(&format!("Theme set to {} {}", next.theme, next.theme.icon()));
    Ok(())
}
