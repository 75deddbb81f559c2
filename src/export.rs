//! Metadata export: the JSON document and the plain-text report.

use crate::file_info::FileInfo;
use crate::metadata::ExtractedMetadata;
use crate::metadata::RawMetadata;
use crate::metadata::categorize;
use crate::metadata::format_value;
use chrono::Local;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

pub const APPLICATION: &str = "imgmeta";

#[derive(Debug, Serialize)]
pub struct MetadataExport {
    pub file_info: ExportFileInfo,
    pub metadata: RawMetadata,
    pub gps: ExportGps,
    pub export_info: ExportInfo,
}

#[derive(Debug, Serialize)]
pub struct ExportFileInfo {
    pub filename: String,
    pub filepath: PathBuf,
    pub filesize: u64,
}

#[derive(Debug, Serialize)]
pub struct ExportGps {
    pub has_gps: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub gps_info: RawMetadata,
}

#[derive(Debug, Serialize)]
pub struct ExportInfo {
    pub exported_at: String,
    pub application: String,
    pub version: String,
}

impl MetadataExport {
    #[must_use]
    pub fn new(path: &Path, filesize: u64, extracted: &ExtractedMetadata) -> Self {
        let gps = extracted.gps.as_ref();
        MetadataExport {
            file_info: ExportFileInfo {
                filename: path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                filepath: path.to_path_buf(),
                filesize,
            },
            metadata: extracted.metadata.clone(),
            gps: ExportGps {
                has_gps: gps.is_some(),
                latitude: gps.map(|g| g.latitude),
                longitude: gps.map(|g| g.longitude),
                gps_info: gps.map(|g| g.raw.clone()).unwrap_or_default(),
            },
            export_info: ExportInfo {
                exported_at: Local::now().to_rfc3339(),
                application: APPLICATION.to_string(),
                version: format!(
                    "{} (rev {})",
                    env!("CARGO_PKG_VERSION"),
                    option_env!("GIT_REVISION").unwrap_or("unknown")
                ),
            },
        }
    }

    pub fn to_json(&self) -> eyre::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Plain-text report: file facts, then each non-empty category, then GPS.
#[must_use]
pub fn render_report(info: &FileInfo, extracted: &ExtractedMetadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Image Metadata ===\n");
    let _ = writeln!(out, "File: {}\n", info.filepath.display());

    let _ = writeln!(out, "=== File Information ===");
    let _ = writeln!(out, "Filename: {}", info.filename);
    let _ = writeln!(out, "File Path: {}", info.filepath.display());
    let _ = writeln!(out, "File Size: {}", info.size_label());
    if let Some(dims) = info.dimensions_label() {
        let _ = writeln!(out, "Dimensions: {dims}");
    }
    if let Some(format) = &info.format {
        let _ = writeln!(out, "Format: {format}");
    }
    if let Some(created) = info.created {
        let _ = writeln!(out, "Created: {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(modified) = info.modified {
        let _ = writeln!(out, "Modified: {}", modified.format("%Y-%m-%d %H:%M:%S"));
    }
    let _ = writeln!(out, "SHA-256: {}", info.sha256);

    if extracted.metadata.is_empty() {
        let _ = writeln!(out, "\nNo metadata found in the image.");
    }
    for (category, entries) in categorize(&extracted.metadata) {
        let _ = writeln!(out, "\n=== {category} ===");
        for (key, value) in &entries {
            let _ = writeln!(out, "{key}: {}", format_value(value));
        }
    }

    let _ = writeln!(out, "\n=== GPS ===");
    match &extracted.gps {
        Some(gps) => {
            let _ = writeln!(out, "Latitude: {:.6}", gps.latitude);
            let _ = writeln!(out, "Longitude: {:.6}", gps.longitude);
            for (key, value) in &gps.raw {
                let _ = writeln!(out, "{key}: {}", format_value(value));
            }
        }
        None => {
            let _ = writeln!(out, "No GPS data found in this image.");
        }
    }
    out
}
