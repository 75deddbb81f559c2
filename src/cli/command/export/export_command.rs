use crate::cache::MetadataCache;
use crate::cli::to_args::ToArgs;
use crate::export::MetadataExport;
use crate::export::render_report;
use crate::file_info::FileInfo;
use crate::file_info::validate_image_file;
use crate::metadata::extract_cached;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use clap::ValueEnum;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

#[derive(ValueEnum, Arbitrary, Clone, Copy, PartialEq, Debug)]
pub enum ExportFormat {
    Json,
    Text,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Export the metadata of an image as a JSON document or a text report
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct ExportArgs {
    /// Image file to read
    pub path: String,
    /// Export format: json|text
    #[clap(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
    /// Write to this file instead of stdout
    #[clap(long)]
    pub output_file: Option<String>,
}

impl ExportArgs {
    /// # Errors
    ///
    /// Returns an error if the image cannot be read or the export cannot be written.
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        let path = PathBuf::from(&self.path);
        validate_image_file(&path)?;
        let cache = settings.cache_enabled.then(MetadataCache::open_default);
        let extracted = extract_cached(&path, cache.as_ref())?;
        let info = FileInfo::read(&path)?;

        let body = match self.format {
            ExportFormat::Json => {
                let mut json = MetadataExport::new(&path, info.filesize, &extracted).to_json()?;
                json.push('\n');
                json
            }
            ExportFormat::Text => render_report(&info, &extracted),
        };

        match &self.output_file {
            Some(output) => {
                std::fs::write(output, body)?;
                info!("Metadata exported to {}", output);
            }
            None => print!("{body}"),
        }
        Ok(())
    }
}

impl ToArgs for ExportArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut rtn = vec![OsString::from(&self.path)];
        rtn.push(format!("--format={}", self.format).into());
        if let Some(output) = &self.output_file {
            rtn.push(format!("--output-file={output}").into());
        }
        rtn
    }
}
