use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("last_dialogue");
    path.push("ui_settings.json");
    path
}

/// Loads persisted settings, falling back to defaults.
pub fn load_settings() -> UiSettings {
    let path = settings_path();
    match load_from(&path) {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            debug!(path = %path.display(), "no settings file, using defaults");
            UiSettings::default()
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "ignoring unreadable settings");
            UiSettings::default()
        }
    }
}

pub fn save_settings(settings: &UiSettings) -> Result<PathBuf> {
    let path = settings_path();
    save_to(&path, settings)?;
    Ok(path)
}

pub fn load_from(path: &Path) -> Result<Option<UiSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let settings = serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(settings))
}

pub fn save_to(path: &Path, settings: &UiSettings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn saves_and_loads_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ui_settings.json");

        let mut settings = UiSettings::default();
        settings.ui_scale = 1.25;
        settings.client.participant_two = "Persona C".into();

        save_to(&path, &settings).unwrap();
        assert_eq!(load_from(&path).unwrap(), Some(settings));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_from(&dir.path().join("none.json")).unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load_from(&path).is_err());
    }
}
