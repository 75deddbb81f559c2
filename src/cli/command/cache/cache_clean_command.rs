use crate::cache::MetadataCache;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;

/// Remove cached metadata records
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct CacheCleanArgs {
    /// Show what would be cleaned without actually deleting
    #[clap(long)]
    pub dry_run: bool,
}

impl CacheCleanArgs {
    /// # Errors
    ///
    /// Returns an error if there are issues accessing or cleaning the cache directory.
    pub fn invoke(self) -> eyre::Result<()> {
        let cache = MetadataCache::open_default();
        let cache_dir = cache.dir();

        if self.dry_run {
            if !cache_dir.exists() {
                println!("Cache directory does not exist: {}", cache_dir.display());
                return Ok(());
            }

            let records = cache.records()?;
            for record in &records {
                println!("Would remove: {}", record.display());
            }
            println!("\nWould remove {} cache entries", records.len());
        } else {
            let result = cache.clean()?;
            println!(
                "Cleaned {} cache entries from {}",
                result.entries_removed,
                cache_dir.display()
            );
        }

        Ok(())
    }
}

impl ToArgs for CacheCleanArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut rtn = vec![];
        if self.dry_run {
            rtn.push(OsString::from("--dry-run"));
        }
        rtn
    }
}
