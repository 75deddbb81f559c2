use crate::cli::to_args::ToArgs;
use crate::file_info::validate_image_file;
use crate::strip::StripMethod;
use crate::strip::strip_metadata;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;

/// Write a copy of an image with its metadata removed
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct StripArgs {
    /// Image file to read
    pub path: String,
    /// Where to write the cleaned copy
    #[clap(long)]
    pub output: String,
}

impl StripArgs {
    /// # Errors
    ///
    /// Returns an error if the image cannot be read or the copy cannot be written.
    pub fn invoke(self) -> eyre::Result<()> {
        let path = PathBuf::from(&self.path);
        validate_image_file(&path)?;
        let output = PathBuf::from(&self.output);
        match strip_metadata(&path, &output)? {
            StripMethod::Lossless => {
                println!("Removed metadata segments, wrote {}", output.display());
            }
            StripMethod::Reencoded => {
                println!("Re-encoded without metadata, wrote {}", output.display());
            }
        }
        Ok(())
    }
}

impl ToArgs for StripArgs {
    fn to_args(&self) -> Vec<OsString> {
        vec![
            OsString::from(&self.path),
            format!("--output={}", self.output).into(),
        ]
    }
}
