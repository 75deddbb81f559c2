//! Key-by-key comparison of two images' metadata.

use crate::metadata::MetadataValue;
use crate::metadata::RawMetadata;
use serde::Serialize;
use std::collections::BTreeSet;

/// Longest value shown in a comparison cell.
pub const CELL_MAX_CHARS: usize = 50;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub key: String,
    pub left: Option<MetadataValue>,
    pub right: Option<MetadataValue>,
}

impl ComparisonRow {
    /// Missing on both sides never happens; missing on one side is a mismatch.
    #[must_use]
    pub fn matches(&self) -> bool {
        self.left == self.right
    }

    #[must_use]
    pub fn left_cell(&self) -> String {
        cell(self.left.as_ref())
    }

    #[must_use]
    pub fn right_cell(&self) -> String {
        cell(self.right.as_ref())
    }
}

fn cell(value: Option<&MetadataValue>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.display_truncated(CELL_MAX_CHARS))
}

/// One row per key present in either map, sorted by key.
#[must_use]
pub fn compare(left: &RawMetadata, right: &RawMetadata) -> Vec<ComparisonRow> {
    let keys: BTreeSet<&String> = left.keys().chain(right.keys()).collect();
    keys.into_iter()
        .map(|key| ComparisonRow {
            key: key.clone(),
            left: left.get(key).cloned(),
            right: right.get(key).cloned(),
        })
        .collect()
}
