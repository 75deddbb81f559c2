use crate::app_home::APP_HOME;
use crate::cache::MetadataCache;
use crate::cli::command::show::output_format::OutputFormat;
use crate::cli::to_args::ToArgs;
use crate::export::render_report;
use crate::file_info::FileInfo;
use crate::file_info::validate_image_file;
use crate::metadata::CategorizedMetadata;
use crate::metadata::ExtractedMetadata;
use crate::metadata::GpsCoordinate;
use crate::metadata::categorize;
use crate::metadata::extract_cached;
use crate::metadata::filter_keys;
use crate::recent_files;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use regex::RegexBuilder;
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

/// Show the metadata of an image, grouped by category
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct ShowArgs {
    /// Image file to read
    pub path: String,
    /// Output mode: auto|json|pretty
    #[clap(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub output: OutputFormat,
    /// Only show tags whose name matches this regex (case-insensitive)
    #[clap(long)]
    pub filter: Option<String>,
    /// Read the file even if a cached record exists
    #[clap(long)]
    pub no_cache: bool,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    file_info: &'a FileInfo,
    metadata: CategorizedMetadata,
    gps: Option<&'a GpsCoordinate>,
    map_url: Option<String>,
}

impl ShowArgs {
    /// # Errors
    ///
    /// Returns an error if the path is not a readable image or the filter is
    /// not a valid regex.
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        let path = PathBuf::from(&self.path);
        validate_image_file(&path)?;
        let filter = self
            .filter
            .as_deref()
            .map(|f| RegexBuilder::new(f).case_insensitive(true).build())
            .transpose()?;

        let cache = (settings.cache_enabled && !self.no_cache).then(MetadataCache::open_default);
        let extracted = extract_cached(&path, cache.as_ref())?;
        recent_files::remember(&APP_HOME, &path, settings.recent_files_max);
        let info = FileInfo::read(&path)?;

        let shown = ExtractedMetadata {
            metadata: match &filter {
                Some(pattern) => filter_keys(&extracted.metadata, pattern),
                None => extracted.metadata.clone(),
            },
            gps: extracted.gps.clone(),
        };
        if filter.is_some() {
            info!(
                "Filter kept {} of {} tags",
                shown.metadata.len(),
                extracted.metadata.len()
            );
        }
        let map_url = shown
            .gps
            .as_ref()
            .map(|g| settings.map_service.url(g.latitude, g.longitude));

        match self.output.resolve() {
            OutputFormat::Json => {
                let output = ShowOutput {
                    file_info: &info,
                    metadata: categorize(&shown.metadata),
                    gps: shown.gps.as_ref(),
                    map_url,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Pretty | OutputFormat::Auto => {
                print!("{}", render_report(&info, &shown));
                if let Some(url) = map_url {
                    println!("{}: {}", settings.map_service.label(), url);
                }
            }
        }
        Ok(())
    }
}

impl ToArgs for ShowArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut rtn = vec![OsString::from(&self.path)];
        rtn.push(format!("--output={}", self.output).into());
        if let Some(filter) = &self.filter {
            rtn.push(format!("--filter={filter}").into());
        }
        if self.no_cache {
            rtn.push("--no-cache".into());
        }
        rtn
    }
}
