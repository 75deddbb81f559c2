//! Where `settings.json` and `recent_files.txt` live.

use directories_next::ProjectDirs;
use once_cell::sync::Lazy;
use std::ops::Deref;
use std::path::Path;
use std::path::PathBuf;
use tracing::warn;

/// Overrides the platform config directory, mostly for tests and portable installs.
pub const CONFIG_DIR_ENV: &str = "IMGMETA_CONFIG_DIR";

#[derive(Clone, Debug)]
pub struct AppHome(pub PathBuf);

impl AppHome {
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }

    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_dir(&self) -> eyre::Result<()> {
        std::fs::create_dir_all(&self.0)?;
        Ok(())
    }

    /// `$IMGMETA_CONFIG_DIR` when set, else the per-user config dir.
    ///
    /// # Errors
    ///
    /// Returns an error when no home directory can be determined.
    pub fn resolve() -> eyre::Result<AppHome> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(AppHome(PathBuf::from(dir)));
        }
        ProjectDirs::from("", "", "imgmeta")
            .map(|pd| AppHome(pd.config_dir().to_path_buf()))
            .ok_or_else(|| eyre::eyre!("No config directory for imgmeta on this platform"))
    }
}

impl Deref for AppHome {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Resolved once per process; falls back to the working directory.
pub static APP_HOME: Lazy<AppHome> = Lazy::new(|| {
    AppHome::resolve().unwrap_or_else(|e| {
        warn!("{e}; keeping config in the working directory");
        AppHome(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_home() {
        let home = AppHome(PathBuf::from("/cfg/imgmeta"));
        assert_eq!(home.file_path("settings.json"), Path::new("/cfg/imgmeta/settings.json"));
        assert_eq!(&*home, Path::new("/cfg/imgmeta"));
    }
}
