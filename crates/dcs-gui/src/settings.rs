//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored as TOML in the platform-specific application config
//! folder (e.g. `~/.config/data-cleaner-studio/` on Linux).

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "data-cleaner-studio";
const APP_NAME: &str = "Data Cleaner Studio";
const CONFIG_FILENAME: &str = "settings.toml";

/// Default backend root when no settings file exists.
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Persisted application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root URL of the cleaning backend.
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults when the file is
    /// missing, unreadable, or malformed.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            tracing::warn!("Could not determine settings path, using defaults");
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No settings file found at {:?}, creating defaults", path);
                let settings = Self::default();
                if let Err(e) = settings.save() {
                    tracing::warn!("Could not write default settings: {}", e);
                }
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk, creating the config directory if needed.
    pub fn save(&self) -> Result<(), String> {
        let Some(path) = settings_path() else {
            return Err("Could not determine settings path".to_string());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, content).map_err(|e| format!("Failed to write settings file: {}", e))?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Path of the settings file, `None` when the platform directory cannot be
/// determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_round_trip() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings.server_url, parsed.server_url);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Settings = toml::from_str("").unwrap();
        assert_eq!(parsed.server_url, DEFAULT_SERVER_URL);
    }
}
