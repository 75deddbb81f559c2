//! EXIF extraction, GPS decoding and display grouping.

pub mod categorize;
pub mod extract;
pub mod gps;
pub mod tag;

pub use categorize::Category;
pub use categorize::CategorizedMetadata;
pub use categorize::categorize;
pub use extract::extract;
pub use gps::GpsCoordinate;

use crate::cache::MetadataCache;
use crate::error::MetadataResult;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;
use tracing::warn;

/// Tag name to value.
pub type RawMetadata = BTreeMap<String, MetadataValue>;

/// Longest text value rendered before truncation.
const DISPLAY_MAX_CHARS: usize = 100;

/// A single metadata value.
///
/// Byte-typed EXIF values only keep their length; they are shown as
/// "binary data" and never dumped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Binary { bytes: usize },
}

impl MetadataValue {
    /// Display form with long text truncated.
    #[must_use]
    pub fn display_truncated(&self, max_chars: usize) -> String {
        match self {
            MetadataValue::Text(s) if s.chars().count() > max_chars => {
                let head: String = s.chars().take(max_chars).collect();
                format!("{head}...")
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(s) if s.is_empty() => f.write_str("Empty"),
            MetadataValue::Text(s) => f.write_str(s),
            MetadataValue::Binary { .. } => f.write_str("binary data"),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

/// Formats a value for the metadata listing.
#[must_use]
pub fn format_value(value: &MetadataValue) -> String {
    value.display_truncated(DISPLAY_MAX_CHARS)
}

/// Entries whose tag name matches `pattern`.
#[must_use]
pub fn filter_keys(raw: &RawMetadata, pattern: &Regex) -> RawMetadata {
    raw.iter()
        .filter(|(key, _)| pattern.is_match(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Everything [`extract`] learns about one image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    pub metadata: RawMetadata,
    pub gps: Option<GpsCoordinate>,
}

impl ExtractedMetadata {
    #[must_use]
    pub fn has_gps(&self) -> bool {
        self.gps.is_some()
    }
}

/// Extracts metadata for `path`, consulting `cache` first when given.
///
/// Cache records that fail to decode into [`ExtractedMetadata`] are treated as
/// misses and overwritten.
///
/// # Errors
///
/// Propagates extraction failures; cache problems never surface.
pub fn extract_cached(path: &Path, cache: Option<&MetadataCache>) -> MetadataResult<ExtractedMetadata> {
    let Some(cache) = cache else {
        return extract(path);
    };

    if let Some(value) = cache.get(path) {
        match serde_json::from_value::<ExtractedMetadata>(value) {
            Ok(cached) => {
                debug!(path = %path.display(), "Using cached metadata");
                return Ok(cached);
            }
            Err(e) => warn!(path = %path.display(), "Ignoring cache record with unexpected shape: {}", e),
        }
    }

    let extracted = extract(path)?;
    match serde_json::to_value(&extracted) {
        Ok(value) => cache.set(path, &value),
        Err(e) => warn!(path = %path.display(), "Failed to serialize metadata for cache: {}", e),
    }
    Ok(extracted)
}
