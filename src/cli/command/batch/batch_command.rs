use crate::batch::collect_images;
use crate::batch::scan_gps;
use crate::cache::MetadataCache;
use crate::cli::to_args::ToArgs;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;
use std::path::Path;
use tracing::info;

/// Scan a folder (or glob pattern) of images for GPS data
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct BatchArgs {
    /// Folder whose images are scanned, or a glob pattern
    pub input: String,
    /// Also write the results to this file
    #[clap(long)]
    pub results: Option<String>,
    /// Read every file even if a cached record exists
    #[clap(long)]
    pub no_cache: bool,
}

impl BatchArgs {
    /// # Errors
    ///
    /// Returns an error if the input is not a valid pattern or the results
    /// file cannot be written. Individual image failures are reported, not raised.
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        let files = collect_images(&self.input)?;
        info!("Found {} image files in {}", files.len(), self.input);

        let cache = (settings.cache_enabled && !self.no_cache).then(MetadataCache::open_default);
        let progress = |done: usize, total: usize, path: &Path| {
            info!("Processed {}/{}: {}", done, total, path.display());
        };
        let report = scan_gps(&files, cache.as_ref(), Some(&progress));

        let rendered = report.render();
        print!("{rendered}");
        if let Some(results) = &self.results {
            std::fs::write(results, &rendered)?;
            info!("Results saved to {}", results);
        }
        Ok(())
    }
}

impl ToArgs for BatchArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut rtn = vec![OsString::from(&self.input)];
        if let Some(results) = &self.results {
            rtn.push(format!("--results={results}").into());
        }
        if self.no_cache {
            rtn.push("--no-cache".into());
        }
        rtn
    }
}
