use crate::cache::MetadataCache;
use crate::cli::to_args::ToArgs;
use crate::file_info::validate_image_file;
use crate::map_service::MapService;
use crate::metadata::extract_cached;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;

/// Print the decimal GPS coordinates of an image and links to view them
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct GpsArgs {
    /// Image file to read
    pub path: String,
    /// Map service for the link; defaults to the configured one
    #[clap(long, value_enum)]
    pub service: Option<MapService>,
    /// Print a link for every known map service
    #[clap(long)]
    pub all_services: bool,
}

impl GpsArgs {
    /// # Errors
    ///
    /// Returns an error if the path is not a readable image.
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        let path = PathBuf::from(&self.path);
        validate_image_file(&path)?;
        let cache = settings.cache_enabled.then(MetadataCache::open_default);
        let extracted = extract_cached(&path, cache.as_ref())?;

        let Some(gps) = extracted.gps else {
            println!("No GPS data found in this image.");
            return Ok(());
        };

        println!("Latitude: {:.6}", gps.latitude);
        println!("Longitude: {:.6}", gps.longitude);
        let services: Vec<MapService> = if self.all_services {
            MapService::ALL.to_vec()
        } else {
            vec![self.service.unwrap_or(settings.map_service)]
        };
        for service in services {
            println!("{}: {}", service.label(), service.url(gps.latitude, gps.longitude));
        }
        Ok(())
    }
}

impl ToArgs for GpsArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut rtn = vec![OsString::from(&self.path)];
        if let Some(service) = self.service {
            rtn.push(format!("--service={}", service.key()).into());
        }
        if self.all_services {
            rtn.push("--all-services".into());
        }
        rtn
    }
}
