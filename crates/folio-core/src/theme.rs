//! Persisted theme preference.
//!
//! A single "light"/"dark" string stored in the config directory, read at
//! startup and written on every toggle.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Read the stored preference; an absent or unreadable file defaults to
/// light, matching first-run behavior.
pub fn load_preference(path: &Path) -> ThemeMode {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| ThemeMode::parse(&s))
        .unwrap_or(ThemeMode::Light)
}

/// Persist the preference, creating the parent directory if needed.
pub fn save_preference(path: &Path, mode: ThemeMode) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, mode.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_preference_round_trip() {
        let dir = std::env::temp_dir().join("folio-theme-test");
        let path = dir.join("theme");

        save_preference(&path, ThemeMode::Dark).unwrap();
        assert_eq!(load_preference(&path), ThemeMode::Dark);

        save_preference(&path, ThemeMode::Light).unwrap();
        assert_eq!(load_preference(&path), ThemeMode::Light);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_defaults_light() {
        let path = std::env::temp_dir().join("folio-theme-missing").join("theme");
        assert_eq!(load_preference(&path), ThemeMode::Light);
    }
}
