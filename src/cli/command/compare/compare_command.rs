use crate::cache::MetadataCache;
use crate::cli::to_args::ToArgs;
use crate::compare::ComparisonRow;
use crate::compare::compare;
use crate::file_info::validate_image_file;
use crate::metadata::extract_cached;
use crate::settings::Settings;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

/// Compare the metadata of two images tag by tag
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct CompareArgs {
    /// First image
    pub left: String,
    /// Second image
    pub right: String,
    /// Hide tags whose values match
    #[clap(long)]
    pub only_differences: bool,
}

impl CompareArgs {
    /// # Errors
    ///
    /// Returns an error if either path is not a readable image.
    pub fn invoke(self, settings: &Settings) -> eyre::Result<()> {
        let left = PathBuf::from(&self.left);
        let right = PathBuf::from(&self.right);
        validate_image_file(&left)?;
        validate_image_file(&right)?;

        let cache = settings.cache_enabled.then(MetadataCache::open_default);
        let left_meta = extract_cached(&left, cache.as_ref())?;
        let right_meta = extract_cached(&right, cache.as_ref())?;

        let rows = compare(&left_meta.metadata, &right_meta.metadata);
        let differing = rows.iter().filter(|r| !r.matches()).count();
        let shown: Vec<&ComparisonRow> = rows
            .iter()
            .filter(|r| !self.only_differences || !r.matches())
            .collect();

        let key_width = shown.iter().map(|r| r.key.chars().count()).max().unwrap_or(0).max(3);
        println!(
            "{:<key_width$}  {:<50}  {:<50}  Match",
            "Tag",
            file_label(&left),
            file_label(&right)
        );
        for row in shown {
            println!(
                "{:<key_width$}  {:<50}  {:<50}  {}",
                row.key,
                row.left_cell(),
                row.right_cell(),
                if row.matches() { "✓" } else { "✗" }
            );
        }
        println!("\n{differing} of {} tags differ", rows.len());
        Ok(())
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl ToArgs for CompareArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut rtn = vec![OsString::from(&self.left), OsString::from(&self.right)];
        if self.only_differences {
            rtn.push("--only-differences".into());
        }
        rtn
    }
}
