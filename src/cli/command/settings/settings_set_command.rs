use crate::app_home::APP_HOME;
use crate::cli::to_args::ToArgs;
use crate::map_service::MapService;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use eyre::bail;
use std::ffi::OsString;

/// Change one or more settings
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct SettingsSetArgs {
    /// Map service used for GPS links
    #[clap(long, value_enum)]
    pub map_service: Option<MapService>,
    /// Whether metadata is cached between runs
    #[clap(long)]
    pub cache_enabled: Option<bool>,
    /// How many recent files to remember
    #[clap(long)]
    pub recent_max: Option<usize>,
    /// Default preview size in pixels
    #[clap(long)]
    pub preview_size: Option<u32>,
}

impl SettingsSetArgs {
    /// Returns `current` with every given option applied, or `None` when no
    /// option was given.
    #[must_use]
    pub fn apply(&self, current: &Settings) -> Option<Settings> {
        if self.map_service.is_none()
            && self.cache_enabled.is_none()
            && self.recent_max.is_none()
            && self.preview_size.is_none()
        {
            return None;
        }
        let mut updated = current.clone();
        if let Some(service) = self.map_service {
            updated.map_service = service;
        }
        if let Some(enabled) = self.cache_enabled {
            updated.cache_enabled = enabled;
        }
        if let Some(max) = self.recent_max {
            updated.recent_files_max = max;
        }
        if let Some(size) = self.preview_size {
            updated.preview_size = size;
        }
        Some(updated)
    }

    /// # Errors
    ///
    /// Returns an error if no option was given or the settings cannot be saved.
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        let Some(updated) = self.apply(settings) else {
            bail!("Nothing to set; pass at least one option (see --help)");
        };
        updated.save(&APP_HOME)?;
        println!("{}", serde_json::to_string_pretty(&updated)?);
        Ok(())
    }
}

impl ToArgs for SettingsSetArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut rtn = vec![];
        if let Some(service) = self.map_service {
            rtn.push(format!("--map-service={}", service.key()).into());
        }
        if let Some(enabled) = self.cache_enabled {
            rtn.push(format!("--cache-enabled={enabled}").into());
        }
        if let Some(max) = self.recent_max {
            rtn.push(format!("--recent-max={max}").into());
        }
        if let Some(size) = self.preview_size {
            rtn.push(format!("--preview-size={size}").into());
        }
        rtn
    }
}
