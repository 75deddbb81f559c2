//! File-level facts about an image: size, timestamps, dimensions and a content hash.

use chrono::DateTime;
use chrono::Local;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Lowercase extensions accepted as image inputs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "gif", "webp"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidImagePath {
    #[error("File does not exist: {}", .0.display())]
    DoesNotExist(PathBuf),
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("Not a supported image format: {}", .0.display())]
    UnsupportedExtension(PathBuf),
}

#[must_use]
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// Checks that `path` is an existing file with a supported extension.
///
/// # Errors
///
/// Returns the first check that fails.
pub fn validate_image_file(path: &Path) -> Result<(), InvalidImagePath> {
    if !path.exists() {
        return Err(InvalidImagePath::DoesNotExist(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(InvalidImagePath::NotAFile(path.to_path_buf()));
    }
    if !has_supported_extension(path) {
        return Err(InvalidImagePath::UnsupportedExtension(path.to_path_buf()));
    }
    Ok(())
}

/// Human-readable byte count, e.g. `0B`, `512.00B`, `1.50KB`.
#[must_use]
pub fn format_size(size_bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if size_bytes == 0 {
        return "0B".to_string();
    }
    #[expect(clippy::cast_precision_loss)]
    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.2}{}", UNITS[unit])
}

#[derive(Clone, Debug, Serialize)]
pub struct FileInfo {
    pub filename: String,
    pub filepath: PathBuf,
    pub filesize: u64,
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
    pub sha256: String,
}

impl FileInfo {
    /// Gathers file facts. Dimensions and format are `None` when the image
    /// header cannot be read.
    pub fn read(path: &Path) -> eyre::Result<FileInfo> {
        let meta = std::fs::metadata(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let (format, dimensions) = match image::ImageReader::open(path)
            .and_then(image::ImageReader::with_guessed_format)
        {
            Ok(reader) => {
                let format = reader.format().map(|f| format!("{f:?}").to_uppercase());
                let dimensions = reader.into_dimensions().ok();
                (format, dimensions)
            }
            Err(e) => {
                debug!(path = %path.display(), "Could not read image header: {}", e);
                (None, None)
            }
        };

        Ok(FileInfo {
            filename,
            filepath: path.to_path_buf(),
            filesize: meta.len(),
            created: meta.created().ok().map(DateTime::<Local>::from),
            modified: meta.modified().ok().map(DateTime::<Local>::from),
            width: dimensions.map(|(w, _)| w),
            height: dimensions.map(|(_, h)| h),
            format,
            sha256: sha256_file(path)?,
        })
    }

    /// `"<w> × <h> pixels"` when known.
    #[must_use]
    pub fn dimensions_label(&self) -> Option<String> {
        Some(format!("{} × {} pixels", self.width?, self.height?))
    }

    /// `"<n> bytes (<size>)"`.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{} bytes ({})", self.filesize, format_size(self.filesize))
    }
}

/// Hex SHA-256 of the file's bytes.
pub fn sha256_file(path: &Path) -> eyre::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    std::io::copy(&mut reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use tempfile::TempDir;

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(512), "512.00B");
        assert_eq!(format_size(1536), "1.50KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00MB");
    }

    #[test]
    fn validation_reasons() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.jpg");
        assert_eq!(
            validate_image_file(&missing),
            Err(InvalidImagePath::DoesNotExist(missing.clone()))
        );
        assert_eq!(
            validate_image_file(dir.path()),
            Err(InvalidImagePath::NotAFile(dir.path().to_path_buf()))
        );
        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "hi").unwrap();
        assert!(matches!(
            validate_image_file(&text),
            Err(InvalidImagePath::UnsupportedExtension(_))
        ));
        let photo = dir.path().join("PHOTO.JPG");
        test_utils::write_plain_jpeg(&photo);
        assert_eq!(validate_image_file(&photo), Ok(()));
    }

    #[test]
    fn sha256_of_known_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abc.bin");
        std::fs::write(&path, b"abc").unwrap();
        assert_eq!(
            sha256_file(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn reads_dimensions_format_and_hash() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.jpg");
        test_utils::write_plain_jpeg(&path);

        let info = FileInfo::read(&path).unwrap();
        assert_eq!(info.filename, "plain.jpg");
        assert_eq!(info.filesize, std::fs::metadata(&path).unwrap().len());
        assert_eq!(info.dimensions_label().as_deref(), Some("8 × 8 pixels"));
        assert_eq!(info.format.as_deref(), Some("JPEG"));
        assert_eq!(info.sha256.len(), 64);
        assert_eq!(info.sha256, sha256_file(&path).unwrap());
        assert!(info.modified.is_some());
    }
}
