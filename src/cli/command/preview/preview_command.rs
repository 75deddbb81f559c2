use crate::cli::to_args::ToArgs;
use crate::file_info::validate_image_file;
use crate::preview::PreviewSettings;
use crate::preview::render_preview;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use eyre::bail;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

/// Render a brightness/contrast adjusted PNG preview of an image
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct PreviewArgs {
    /// Image file to read
    pub path: String,
    /// PNG file to write
    #[clap(long)]
    pub output: String,
    /// Brightness factor, 1.0 leaves the image unchanged
    #[clap(long, default_value_t = 1.0)]
    #[arbitrary(value = 1.0)]
    pub brightness: f32,
    /// Contrast factor, 1.0 leaves the image unchanged
    #[clap(long, default_value_t = 1.0)]
    #[arbitrary(value = 1.0)]
    pub contrast: f32,
    /// Fit the preview within a square of this many pixels; defaults to the configured size
    #[clap(long)]
    pub size: Option<u32>,
}

impl PreviewArgs {
    /// # Errors
    ///
    /// Returns an error if a factor is negative, the image cannot be decoded or
    /// the preview cannot be written.
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        if !(self.brightness.is_finite() && self.brightness >= 0.0) {
            bail!("Brightness must be a non-negative number, got {}", self.brightness);
        }
        if !(self.contrast.is_finite() && self.contrast >= 0.0) {
            bail!("Contrast must be a non-negative number, got {}", self.contrast);
        }
        let path = PathBuf::from(&self.path);
        validate_image_file(&path)?;

        let preview = render_preview(
            &path,
            &PreviewSettings {
                brightness: self.brightness,
                contrast: self.contrast,
                max_size: self.size.unwrap_or(settings.preview_size),
            },
        )?;
        std::fs::write(&self.output, &preview.data)?;
        info!(
            "Preview {}x{} -> {}x{} written to {}",
            preview.original_width,
            preview.original_height,
            preview.output_width,
            preview.output_height,
            self.output
        );
        Ok(())
    }
}

impl ToArgs for PreviewArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut rtn = vec![OsString::from(&self.path)];
        rtn.push(format!("--output={}", self.output).into());
        rtn.push(format!("--brightness={}", self.brightness).into());
        rtn.push(format!("--contrast={}", self.contrast).into());
        if let Some(size) = self.size {
            rtn.push(format!("--size={size}").into());
        }
        rtn
    }
}
