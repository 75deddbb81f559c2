//! GPS scan over many images, one extraction at a time.

use crate::cache::MetadataCache;
use crate::file_info::has_supported_extension;
use crate::metadata::extract_cached;
use glob::Pattern;
use glob::glob;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;
use tracing::warn;

/// Outcome for a single file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum BatchOutcome {
    Gps { latitude: f64, longitude: f64 },
    NoGps,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: BatchOutcome,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn gps_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, BatchOutcome::Gps { .. }))
            .count()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, BatchOutcome::Failed(_)))
            .count()
    }

    /// One line per file plus the summary line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.entries.is_empty() {
            out.push_str("No image files found.\n");
            return out;
        }
        let _ = writeln!(out, "Processing {} images...", self.total());
        for entry in &self.entries {
            let name = entry
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| entry.path.display().to_string());
            let _ = match &entry.outcome {
                BatchOutcome::Gps {
                    latitude,
                    longitude,
                } => writeln!(out, "{name}: ✓ GPS ({latitude:.6}, {longitude:.6})"),
                BatchOutcome::NoGps => writeln!(out, "{name}: ✗ No GPS"),
                BatchOutcome::Failed(e) => writeln!(out, "{name}: Error - {e}"),
            };
        }
        let _ = writeln!(
            out,
            "\nSummary: {}/{} images have GPS data",
            self.gps_count(),
            self.total()
        );
        out
    }
}

/// Image files to scan. A directory yields its direct children with a
/// supported extension; anything else is treated as a glob pattern.
///
/// Directory names are matched literally, so `trip [2024]` is a folder and not
/// a character class.
pub fn collect_images(input: &str) -> eyre::Result<Vec<PathBuf>> {
    let pattern = if Path::new(input).is_dir() {
        Path::new(&Pattern::escape(input))
            .join("*")
            .to_string_lossy()
            .to_string()
    } else {
        input.to_string()
    };

    let mut files = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry.map_err(|e| eyre::eyre!("Glob pattern error: {}", e))?;
        if path.is_file() && has_supported_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Extracts every file in order. A failing file is recorded and the scan
/// continues.
pub fn scan_gps(
    files: &[PathBuf],
    cache: Option<&MetadataCache>,
    progress_callback: Option<&dyn Fn(usize, usize, &Path)>,
) -> BatchReport {
    let total = files.len();
    let mut report = BatchReport::default();

    for (i, path) in files.iter().enumerate() {
        let outcome = match extract_cached(path, cache) {
            Ok(extracted) => match extracted.gps {
                Some(gps) => BatchOutcome::Gps {
                    latitude: gps.latitude,
                    longitude: gps.longitude,
                },
                None => BatchOutcome::NoGps,
            },
            Err(e) => {
                warn!(path = %path.display(), "Batch extraction failed: {}", e);
                BatchOutcome::Failed(e.to_string())
            }
        };
        report.entries.push(BatchEntry {
            path: path.clone(),
            outcome,
        });

        if let Some(cb) = progress_callback {
            cb(i + 1, total, path);
        }
    }

    report
}
