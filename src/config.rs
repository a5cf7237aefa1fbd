use dirs::home_dir;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::layout::LayoutError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "COMPOSER_LAYOUT_DATA_DIR";

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPreferences {
    pub pretty_output: bool,
    pub validate_input: bool,
    // env_logger filter applied to this crate when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for LayoutPreferences {
    fn default() -> Self {
        Self {
            pretty_output: true,
            validate_input: true,
            log_filter: "info".to_string(),
        }
    }
}

impl LayoutPreferences {
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_filter.parse().unwrap_or(log::LevelFilter::Info)
    }
}

pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self { dir: get_data_dir() }
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILE)
    }

    /// Missing or unreadable preferences fall back to defaults.
    pub fn load(&self) -> LayoutPreferences {
        match self.load_from_json() {
            Ok(prefs) => prefs,
            Err(e) => {
                log::debug!(
                    "Using default preferences ({}): {}",
                    self.path().display(),
                    e
                );
                LayoutPreferences::default()
            }
        }
    }

    fn load_from_json(&self) -> Result<LayoutPreferences, LayoutError> {
        let content = fs::read_to_string(self.path())?;
        let prefs: LayoutPreferences = serde_json::from_str(&content)?;
        info!(
            "Loaded prefs from JSON: pretty_output={}, validate_input={}, log_filter={}",
            prefs.pretty_output, prefs.validate_input, prefs.log_filter
        );
        Ok(prefs)
    }

    pub fn save(&self, prefs: &LayoutPreferences) -> Result<(), LayoutError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            LayoutError::Config(format!(
                "Cannot create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        let content = serde_json::to_string_pretty(prefs)?;
        fs::write(self.path(), content)?;
        info!(
            "Saved prefs to JSON: pretty_output={}, validate_input={}, log_filter={}",
            prefs.pretty_output, prefs.validate_input, prefs.log_filter
        );
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Default directory in the home folder
fn get_default_data_dir() -> PathBuf {
    if let Some(mut hd) = home_dir() {
        hd.push(".composer_layout");
        hd
    } else {
        PathBuf::from(".composer_layout")
    }
}

pub fn get_data_dir() -> PathBuf {
    // Custom directory from the environment wins when absolute
    if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
        let path = PathBuf::from(custom_dir);
        if path.is_absolute() {
            return path;
        }
        log::warn!("{} must be absolute, ignoring {}", DATA_DIR_ENV, path.display());
    }
    get_default_data_dir()
}
