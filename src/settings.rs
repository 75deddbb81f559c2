//! Persisted user settings, loaded once at startup and passed to commands.

use crate::app_home::AppHome;
use crate::map_service::MapService;
use crate::preview::DEFAULT_PREVIEW_SIZE;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Service used when a command does not name one.
    pub map_service: MapService,
    /// Whether `show`, `export` and `batch` consult the metadata cache.
    pub cache_enabled: bool,
    /// Length cap of the recent files list.
    pub recent_files_max: usize,
    /// Default edge length for `preview`.
    pub preview_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_service: MapService::default(),
            cache_enabled: true,
            recent_files_max: 10,
            preview_size: DEFAULT_PREVIEW_SIZE,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = "settings.json";

    /// Returns the path the file should live at
    pub fn file_path(home: &AppHome) -> PathBuf {
        home.file_path(Self::FILE_NAME)
    }

    /// Missing file gives defaults; missing keys take their defaults and
    /// unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(home: &AppHome) -> eyre::Result<Settings> {
        let path = Self::file_path(home);
        if !path.exists() {
            return Ok(Settings::default());
        }
        let s = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&s)?)
    }

    /// Loads, falling back to defaults with a warning when the file is unusable.
    pub fn load_or_default(home: &AppHome) -> Settings {
        Self::load(home).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load settings from {}: {}. Using defaults",
                Self::file_path(home).display(),
                e
            );
            Settings::default()
        })
    }

    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written.
    pub fn save(&self, home: &AppHome) -> eyre::Result<()> {
        home.ensure_dir()?;
        fs::write(Self::file_path(home), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
