//! Reading the EXIF directory of an image file.

use crate::error::MetadataError;
use crate::error::MetadataResult;
use crate::metadata::ExtractedMetadata;
use crate::metadata::GpsCoordinate;
use crate::metadata::MetadataValue;
use crate::metadata::RawMetadata;
use crate::metadata::tag::Namespace;
use crate::metadata::tag::resolve;
use exif::Context;
use exif::Exif;
use exif::Field;
use exif::In;
use exif::Tag;
use exif::Value;
use image::ImageFormat;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;
use tracing::debug;
use tracing::warn;

/// Bytes read up front to sniff the container format.
const SNIFF_LEN: u64 = 64;

/// Sub-directory pointers are layout, not metadata.
const IFD_POINTERS: [Tag; 3] = [
    Tag::ExifIFDPointer,
    Tag::GPSInfoIFDPointer,
    Tag::InteropIFDPointer,
];

/// Opens `path` and returns its general EXIF fields and, when all four
/// latitude/longitude sub-tags are present and well formed, its GPS position.
///
/// Images without an EXIF directory yield empty metadata. A malformed GPS block
/// only drops the coordinate.
///
/// # Errors
///
/// [`MetadataError::FileNotFound`] when `path` does not exist,
/// [`MetadataError::UnsupportedFormat`] when the bytes are not an image format
/// the `image` crate recognises.
pub fn extract(path: &Path) -> MetadataResult<ExtractedMetadata> {
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => MetadataError::FileNotFound(path.to_path_buf()),
        _ => MetadataError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let mut reader = BufReader::new(file);
    let io_err = |source: std::io::Error| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut header = Vec::new();
    reader
        .by_ref()
        .take(SNIFF_LEN)
        .read_to_end(&mut header)
        .map_err(io_err)?;
    let format = image::guess_format(&header).map_err(|source| MetadataError::UnsupportedFormat {
        path: path.to_path_buf(),
        source,
    })?;
    reader.seek(SeekFrom::Start(0)).map_err(io_err)?;

    let Some(exif) = read_exif(&mut reader, format, path) else {
        return Ok(ExtractedMetadata::default());
    };

    let metadata = general_fields(&exif);
    let gps = gps_coordinate(&exif, path);
    debug!(
        path = %path.display(),
        fields = metadata.len(),
        has_gps = gps.is_some(),
        "Extracted metadata"
    );
    Ok(ExtractedMetadata { metadata, gps })
}

/// Containers `kamadak-exif` can read an EXIF directory from.
fn carries_exif(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Tiff | ImageFormat::WebP
    )
}

fn read_exif(reader: &mut BufReader<File>, format: ImageFormat, path: &Path) -> Option<Exif> {
    if !carries_exif(format) {
        debug!(path = %path.display(), ?format, "Format has no EXIF container");
        return None;
    }
    let mut exif_reader = exif::Reader::new();
    exif_reader.continue_on_error(true);
    match exif_reader.read_from_container(reader) {
        Ok(exif) => Some(exif),
        Err(exif::Error::PartialResult(partial)) => {
            let (exif, errors) = partial.into_inner();
            warn!(
                path = %path.display(),
                errors = errors.len(),
                "EXIF directory partially unreadable; keeping the readable fields"
            );
            Some(exif)
        }
        Err(exif::Error::NotFound(_)) => {
            debug!(path = %path.display(), "No EXIF data");
            None
        }
        Err(e) => {
            warn!(path = %path.display(), "Ignoring unreadable EXIF data: {}", e);
            None
        }
    }
}

fn general_fields(exif: &Exif) -> RawMetadata {
    exif.fields()
        .filter(|f| f.ifd_num == In::PRIMARY)
        .filter(|f| f.tag.context() != Context::Gps && !IFD_POINTERS.contains(&f.tag))
        .map(|f| (resolve(f.tag.number(), Namespace::Exif), stringify(f, exif)))
        .collect()
}

fn gps_fields(exif: &Exif) -> RawMetadata {
    exif.fields()
        .filter(|f| f.ifd_num == In::PRIMARY && f.tag.context() == Context::Gps)
        .map(|f| (resolve(f.tag.number(), Namespace::Gps), stringify(f, exif)))
        .collect()
}

fn gps_coordinate(exif: &Exif, path: &Path) -> Option<GpsCoordinate> {
    let field = |tag| exif.get_field(tag, In::PRIMARY);
    let (Some(lat), Some(lat_ref), Some(lon), Some(lon_ref)) = (
        field(Tag::GPSLatitude),
        field(Tag::GPSLatitudeRef),
        field(Tag::GPSLongitude),
        field(Tag::GPSLongitudeRef),
    ) else {
        return None;
    };

    let decoded = GpsCoordinate::from_dms(
        &dms_components(&lat.value),
        &ascii_text(&lat_ref.value).unwrap_or_default(),
        &dms_components(&lon.value),
        &ascii_text(&lon_ref.value).unwrap_or_default(),
        gps_fields(exif),
    );
    match decoded {
        Ok(coordinate) => Some(coordinate),
        Err(e) => {
            warn!(path = %path.display(), "Ignoring GPS block: {}", e);
            None
        }
    }
}

/// Rational triples are the only valid encoding; anything else decodes to an
/// empty list and fails the arity check.
fn dms_components(value: &Value) -> Vec<f64> {
    match value {
        Value::Rational(parts) => parts.iter().map(exif::Rational::to_f64).collect(),
        _ => Vec::new(),
    }
}

fn ascii_text(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => Some(
            parts
                .iter()
                .map(|p| String::from_utf8_lossy(p).trim_end_matches(['\0', ' ']).to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}

fn stringify(field: &Field, exif: &Exif) -> MetadataValue {
    match &field.value {
        Value::Byte(bytes) | Value::Undefined(bytes, _) => MetadataValue::Binary { bytes: bytes.len() },
        value @ Value::Ascii(_) => MetadataValue::Text(ascii_text(value).unwrap_or_default()),
        _ => MetadataValue::Text(field.display_value().with_unit(exif).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use crate::test_utils::IfdEntry;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let err = extract(&dir.path().join("nope.jpg")).unwrap_err();
        assert!(matches!(err, MetadataError::FileNotFound(_)));
    }

    #[test]
    fn non_image_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.jpg");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = extract(&path).unwrap_err();
        assert!(matches!(err, MetadataError::UnsupportedFormat { .. }));
    }

    #[test]
    fn jpeg_without_exif_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.jpg");
        test_utils::write_plain_jpeg(&path);
        let extracted = extract(&path).unwrap();
        assert!(extracted.metadata.is_empty());
        assert!(extracted.gps.is_none());
    }

    #[test]
    fn png_and_bmp_without_exif_are_empty() {
        let dir = TempDir::new().unwrap();
        for name in ["plain.png", "plain.bmp"] {
            let path = dir.path().join(name);
            test_utils::sample_image().save(&path).unwrap();
            assert_eq!(extract(&path).unwrap(), ExtractedMetadata::default());
        }
    }

    #[test]
    fn reads_general_fields_and_gps() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gps.jpg");
        test_utils::write_jpeg_with_exif(&path, &test_utils::pittsburgh_exif());

        let extracted = extract(&path).unwrap();
        assert_eq!(
            extracted.metadata.get("Make"),
            Some(&MetadataValue::Text("TestCam".into()))
        );
        assert_eq!(
            extracted.metadata.get("Model"),
            Some(&MetadataValue::Text("Model 7".into()))
        );
        // GPS sub-tags and the directory pointer stay out of the general map.
        assert!(!extracted.metadata.contains_key("GPSLatitude"));
        assert!(!extracted.metadata.contains_key("GPSInfoIFDPointer"));

        let gps = extracted.gps.expect("coordinate");
        assert!((gps.latitude - 40.446195).abs() < 1e-6);
        assert!((gps.longitude - -79.948862).abs() < 1e-6);
        assert_eq!(gps.raw.get("GPSLatitudeRef"), Some(&MetadataValue::from("N")));
        assert_eq!(gps.raw.get("GPSLongitudeRef"), Some(&MetadataValue::from("W")));
        assert!(gps.raw.contains_key("GPSLatitude"));
        assert!(gps.raw.contains_key("GPSLongitude"));
    }

    #[test]
    fn byte_values_are_marked_binary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.jpg");
        let exif = test_utils::exif_blob(
            &[
                IfdEntry::Ascii(0x010F, "TestCam"),
                IfdEntry::Undefined(0x9286, vec![7; 12]),
            ],
            &[],
        );
        test_utils::write_jpeg_with_exif(&path, &exif);

        let extracted = extract(&path).unwrap();
        assert_eq!(
            extracted.metadata.get("UserComment"),
            Some(&MetadataValue::Binary { bytes: 12 })
        );
        assert!(extracted.gps.is_none());
    }

    #[test]
    fn incomplete_gps_block_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.jpg");
        let exif = test_utils::exif_blob(
            &[IfdEntry::Ascii(0x010F, "TestCam")],
            &[
                IfdEntry::Ascii(1, "N"),
                IfdEntry::Rationals(2, vec![(40, 1), (26, 1), (46302, 1000)]),
                IfdEntry::Rationals(4, vec![(79, 1), (56, 1), (55903, 1000)]),
            ],
        );
        test_utils::write_jpeg_with_exif(&path, &exif);

        let extracted = extract(&path).unwrap();
        assert!(extracted.gps.is_none());
        assert_eq!(extracted.metadata.get("Make"), Some(&MetadataValue::from("TestCam")));
    }

    #[test]
    fn malformed_gps_keeps_general_metadata() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.jpg");
        let exif = test_utils::exif_blob(
            &[IfdEntry::Ascii(0x010F, "TestCam")],
            &[
                IfdEntry::Ascii(1, "X"),
                IfdEntry::Rationals(2, vec![(40, 1), (26, 1)]),
                IfdEntry::Ascii(3, "W"),
                IfdEntry::Rationals(4, vec![(79, 1), (56, 1), (55903, 1000)]),
            ],
        );
        test_utils::write_jpeg_with_exif(&path, &exif);

        let extracted = extract(&path).unwrap();
        assert!(extracted.gps.is_none());
        assert_eq!(extracted.metadata.len(), 1);
    }
}
