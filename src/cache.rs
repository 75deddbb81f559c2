//! Disk cache for extracted metadata.
//!
//! One JSON record per image path, named by a hash of the path string. The
//! file's content is never looked at, so a file replaced in place keeps its old
//! record until the cache is cleaned.
//!
//! Reads and writes are best-effort: failures are logged and surface as a miss
//! or a dropped write.

use directories_next::ProjectDirs;
use once_cell::sync::Lazy;
use sha2::Digest;
use sha2::Sha256;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::warn;

/// The cache home directory.
pub static CACHE_HOME: Lazy<CacheHome> = Lazy::new(|| match CacheHome::resolve() {
    Ok(c) => c,
    Err(e) => {
        warn!("Failed to resolve cache home: {}", e);
        CacheHome(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
});

/// Helper that resolves the application cache directory.
#[derive(Clone, Debug)]
pub struct CacheHome(pub PathBuf);

impl CacheHome {
    /// Resolve the CacheHome according to:
    /// * If `IMGMETA_CACHE_DIR` env var is set, use that directory
    /// * Otherwise use the platform `ProjectDirs::cache_dir()` for imgmeta
    pub fn resolve() -> eyre::Result<CacheHome> {
        if let Ok(override_dir) = std::env::var("IMGMETA_CACHE_DIR") {
            return Ok(CacheHome(PathBuf::from(override_dir)));
        }
        if let Some(pd) = ProjectDirs::from("", "", "imgmeta") {
            Ok(CacheHome(pd.cache_dir().to_path_buf()))
        } else {
            Err(eyre::eyre!("Could not determine cache directory"))
        }
    }

    /// Returns the path to the metadata records subdirectory.
    pub fn metadata_dir(&self) -> PathBuf {
        self.0.join("metadata")
    }
}

impl std::ops::Deref for CacheHome {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.0.as_path()
    }
}

/// Key for `path`: the first 16 hex chars of SHA-256 over the path string.
#[must_use]
pub fn cache_key(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    let hash = hex::encode(hasher.finalize());
    hash[..16].to_string()
}

/// Path-keyed JSON records in a single directory.
#[derive(Clone, Debug)]
pub struct MetadataCache {
    dir: PathBuf,
}

impl MetadataCache {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache rooted at [`CACHE_HOME`].
    pub fn open_default() -> Self {
        Self::new(CACHE_HOME.metadata_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record for `path`.
    pub fn record_path(&self, path: &Path) -> PathBuf {
        self.dir.join(format!("{}.json", cache_key(path)))
    }

    /// The stored JSON for `path`, or `None` when absent, unreadable or corrupt.
    pub fn get(&self, path: &Path) -> Option<serde_json::Value> {
        let record = self.record_path(path);
        let body = match std::fs::read_to_string(&record) {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(image = %path.display(), "Cache miss");
                return None;
            }
            Err(e) => {
                warn!(record = %record.display(), "Error reading cache: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&body) {
            Ok(value) => {
                debug!(image = %path.display(), record = %record.display(), "Cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(record = %record.display(), "Corrupt cache record: {}", e);
                None
            }
        }
    }

    /// Stores `data` for `path`, replacing any existing record.
    pub fn set(&self, path: &Path, data: &serde_json::Value) {
        if let Err(e) = self.try_set(path, data) {
            warn!(image = %path.display(), "Error writing cache: {}", e);
        }
    }

    fn try_set(&self, path: &Path, data: &serde_json::Value) -> eyre::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let record = self.record_path(path);
        std::fs::write(&record, serde_json::to_string_pretty(data)?)?;
        debug!(image = %path.display(), record = %record.display(), "Cached metadata");
        Ok(())
    }

    /// Record files currently on disk.
    pub fn records(&self) -> eyre::Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "json") {
                records.push(path);
            }
        }
        records.sort();
        Ok(records)
    }

    /// Remove every record, and the directory itself once empty.
    pub fn clean(&self) -> eyre::Result<CleanResult> {
        let mut result = CleanResult::default();
        for record in self.records()? {
            std::fs::remove_file(&record)?;
            result.entries_removed += 1;
        }

        if self.dir.exists() && std::fs::read_dir(&self.dir)?.next().is_none() {
            std::fs::remove_dir(&self.dir)?;
        }

        Ok(result)
    }
}

/// Result of a cache clean operation.
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Number of cache entries removed.
    pub entries_removed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn key_is_stable_and_path_derived() {
        let a = cache_key(Path::new("/photos/a.jpg"));
        assert_eq!(a, cache_key(Path::new("/photos/a.jpg")));
        assert_eq!(a.len(), 16);
        assert_ne!(a, cache_key(Path::new("/photos/b.jpg")));
    }

    #[test]
    fn round_trip_and_overwrite() {
        let dir = TempDir::new().unwrap();
        let cache = MetadataCache::new(dir.path().join("metadata"));
        let image = Path::new("/photos/a.jpg");

        cache.set(image, &json!({"Make": "Canon", "n": [1, 2.5, null]}));
        assert_eq!(cache.get(image), Some(json!({"Make": "Canon", "n": [1, 2.5, null]})));

        cache.set(image, &json!("replaced"));
        assert_eq!(cache.get(image), Some(json!("replaced")));
        assert_eq!(cache.records().unwrap().len(), 1);
    }

    #[test]
    fn miss_for_unknown_path() {
        let dir = TempDir::new().unwrap();
        let cache = MetadataCache::new(dir.path());
        assert_eq!(cache.get(Path::new("/never/set.jpg")), None);
    }

    #[test]
    fn corrupt_record_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let cache = MetadataCache::new(dir.path());
        let image = Path::new("/photos/a.jpg");
        std::fs::write(cache.record_path(image), "{ not json").unwrap();
        assert_eq!(cache.get(image), None);
    }

    #[test]
    fn failed_write_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // A regular file where the cache directory should be.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let cache = MetadataCache::new(&blocker);
        cache.set(Path::new("/photos/a.jpg"), &json!(1));
        assert_eq!(cache.get(Path::new("/photos/a.jpg")), None);
    }

    #[test]
    fn clean_removes_records_and_directory() {
        let dir = TempDir::new().unwrap();
        let cache = MetadataCache::new(dir.path().join("metadata"));
        cache.set(Path::new("/a.jpg"), &json!(1));
        cache.set(Path::new("/b.jpg"), &json!(2));

        let result = cache.clean().unwrap();
        assert_eq!(result.entries_removed, 2);
        assert!(!cache.dir().exists());
        assert_eq!(cache.clean().unwrap().entries_removed, 0);
    }
}
