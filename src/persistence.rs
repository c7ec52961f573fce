//! Preference persistence
//!
//! Preferences are written as JSON to the user data directory. Saving is
//! explicit (bound to a key), never implicit; a missing file yields the
//! defaults.

use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::model::{appearance::ColorScheme, autologout::AutoLogoutPreference};
use crate::utils::get_data_dir;

const PREFERENCES_FILE: &str = "preferences.json";

/// Everything the application persists between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredPreferences {
    #[serde(default)]
    pub autologout: AutoLogoutPreference,
    #[serde(default)]
    pub scheme: ColorScheme,
}

pub fn preferences_path() -> PathBuf {
    get_data_dir().join(PREFERENCES_FILE)
}

/// Load stored preferences, falling back to defaults when no file exists.
pub fn load() -> Result<StoredPreferences> {
    let path = preferences_path();
    if !path.exists() {
        log::info!("No preferences file at {path:?}, using defaults");
        return Ok(StoredPreferences::default());
    }

    let raw = fs::read_to_string(&path).wrap_err_with(|| format!("failed to read {path:?}"))?;
    let stored =
        serde_json::from_str(&raw).wrap_err_with(|| format!("failed to parse {path:?}"))?;
    Ok(stored)
}

/// Write preferences to disk, creating the data directory if needed.
pub fn save(preferences: &StoredPreferences) -> Result<()> {
    let path = preferences_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let raw = serde_json::to_string_pretty(preferences)?;
    fs::write(&path, raw).wrap_err_with(|| format!("failed to write {path:?}"))?;
    log::info!("Preferences saved to {path:?}");
    Ok(())
}
