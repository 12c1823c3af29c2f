use anyhow::{anyhow, Result};

use folio_core::theme::{load_preference, save_preference, ThemeMode};
use folio_core::AppConfig;

pub fn run(mode: Option<&str>) -> Result<()> {
    let path = AppConfig::theme_path();

    match mode {
        None => {
            println!("{}", load_preference(&path).as_str());
        }
        Some(raw) => {
            let mode = ThemeMode::parse(raw)
                .ok_or_else(|| anyhow!("unknown theme '{}', expected 'light' or 'dark'", raw))?;
            save_preference(&path, mode)?;
            println!("theme set to {}", mode.as_str());
        }
    }

    Ok(())
}
