use crate::cache::MetadataCache;
use crate::cache::cache_key;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;
use std::path::Path;

/// Show the cached record for an image
#[derive(Args, Arbitrary, Clone, PartialEq, Debug)]
pub struct CacheShowArgs {
    /// Image path exactly as it was passed to other commands
    pub path: String,
}

impl CacheShowArgs {
    /// # Errors
    ///
    /// Returns an error if the record cannot be printed.
    pub fn invoke(self) -> eyre::Result<()> {
        let cache = MetadataCache::open_default();
        let path = Path::new(&self.path);
        println!("Key: {}", cache_key(path));
        println!("Record: {}", cache.record_path(path).display());
        match cache.get(path) {
            Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            None => println!("No cache entry for {}", self.path),
        }
        Ok(())
    }
}

impl ToArgs for CacheShowArgs {
    fn to_args(&self) -> Vec<OsString> {
        vec![OsString::from(&self.path)]
    }
}
