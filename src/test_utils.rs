//! Image fixtures for tests: small generated images, optionally carrying a
//! hand-built EXIF directory injected with `img-parts`.

use image::DynamicImage;
use image::ImageFormat;
use image::Rgb;
use image::RgbImage;
use img_parts::Bytes;
use img_parts::ImageEXIF;
use img_parts::jpeg::Jpeg;
use std::io::Cursor;
use std::path::Path;

/// One IFD entry: tag id plus value.
#[derive(Clone, Debug)]
pub enum IfdEntry {
    Ascii(u16, &'static str),
    Rationals(u16, Vec<(u32, u32)>),
    Undefined(u16, Vec<u8>),
    Short(u16, u16),
}

const TYPE_SHORT: u16 = 3;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;
const TYPE_UNDEFINED: u16 = 7;
const GPS_IFD_POINTER: u16 = 0x8825;

impl IfdEntry {
    /// (tag, type, count, little-endian value bytes)
    fn encode(&self) -> (u16, u16, u32, Vec<u8>) {
        match self {
            IfdEntry::Ascii(tag, s) => {
                let mut bytes = s.as_bytes().to_vec();
                bytes.push(0);
                (*tag, TYPE_ASCII, bytes.len() as u32, bytes)
            }
            IfdEntry::Rationals(tag, parts) => {
                let bytes = parts
                    .iter()
                    .flat_map(|(n, d)| n.to_le_bytes().into_iter().chain(d.to_le_bytes()))
                    .collect();
                (*tag, TYPE_RATIONAL, parts.len() as u32, bytes)
            }
            IfdEntry::Undefined(tag, bytes) => (*tag, TYPE_UNDEFINED, bytes.len() as u32, bytes.clone()),
            IfdEntry::Short(tag, v) => (*tag, TYPE_SHORT, 1, v.to_le_bytes().to_vec()),
        }
    }
}

/// Serializes one IFD starting at absolute offset `base`, followed by its
/// out-of-line value area.
fn write_ifd(mut entries: Vec<(u16, u16, u32, Vec<u8>)>, base: u32) -> Vec<u8> {
    entries.sort_by_key(|e| e.0);
    let data_start = base + 2 + 12 * entries.len() as u32 + 4;
    let mut ifd = Vec::new();
    let mut data = Vec::new();
    ifd.extend((entries.len() as u16).to_le_bytes());
    for (tag, kind, count, bytes) in entries {
        ifd.extend(tag.to_le_bytes());
        ifd.extend(kind.to_le_bytes());
        ifd.extend(count.to_le_bytes());
        if bytes.len() <= 4 {
            let mut inline = bytes;
            inline.resize(4, 0);
            ifd.extend(inline);
        } else {
            ifd.extend((data_start + data.len() as u32).to_le_bytes());
            data.extend(bytes);
            if data.len() % 2 == 1 {
                data.push(0);
            }
        }
    }
    ifd.extend(0u32.to_le_bytes());
    ifd.extend(data);
    ifd
}

/// A little-endian TIFF structure holding `primary` in IFD0 and, when `gps` is
/// non-empty, a GPS sub-directory linked from IFD0.
pub fn exif_blob(primary: &[IfdEntry], gps: &[IfdEntry]) -> Vec<u8> {
    const IFD0_OFFSET: u32 = 8;
    let mut ifd0: Vec<_> = primary.iter().map(IfdEntry::encode).collect();
    if !gps.is_empty() {
        // Placeholder pointer so the IFD0 size is final before the offset is known.
        ifd0.push((GPS_IFD_POINTER, TYPE_LONG, 1, vec![0; 4]));
    }
    let ifd0_len = write_ifd(ifd0.clone(), IFD0_OFFSET).len() as u32;
    let gps_offset = IFD0_OFFSET + ifd0_len + (ifd0_len % 2);
    if let Some(pointer) = ifd0.iter_mut().find(|e| e.0 == GPS_IFD_POINTER) {
        pointer.3 = gps_offset.to_le_bytes().to_vec();
    }

    let mut blob = b"II".to_vec();
    blob.extend(42u16.to_le_bytes());
    blob.extend(IFD0_OFFSET.to_le_bytes());
    blob.extend(write_ifd(ifd0, IFD0_OFFSET));
    if !gps.is_empty() {
        blob.resize(gps_offset as usize, 0);
        blob.extend(write_ifd(gps.iter().map(IfdEntry::encode).collect(), gps_offset));
    }
    blob
}

/// Make/Model plus the GPS block of a photo taken in Pittsburgh
/// (40°26'46.302"N, 79°56'55.903"W).
pub fn pittsburgh_exif() -> Vec<u8> {
    exif_blob(
        &[
            IfdEntry::Ascii(0x010F, "TestCam"),
            IfdEntry::Ascii(0x0110, "Model 7"),
            IfdEntry::Short(0x0112, 1),
        ],
        &[
            IfdEntry::Ascii(1, "N"),
            IfdEntry::Rationals(2, vec![(40, 1), (26, 1), (46302, 1000)]),
            IfdEntry::Ascii(3, "W"),
            IfdEntry::Rationals(4, vec![(79, 1), (56, 1), (55903, 1000)]),
        ],
    )
}

/// An 8x8 gradient.
pub fn sample_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(8, 8, |x, y| {
        Rgb([(x * 32) as u8, (y * 32) as u8, 128])
    }))
}

pub fn jpeg_bytes() -> Vec<u8> {
    let mut data = Vec::new();
    sample_image()
        .write_to(&mut Cursor::new(&mut data), ImageFormat::Jpeg)
        .expect("encode jpeg");
    data
}

pub fn write_plain_jpeg(path: &Path) {
    std::fs::write(path, jpeg_bytes()).expect("write jpeg");
}

/// Writes a JPEG whose APP1 segment carries `exif` (TIFF bytes, no `Exif\0\0` prefix).
pub fn write_jpeg_with_exif(path: &Path, exif: &[u8]) {
    let mut jpeg = Jpeg::from_bytes(Bytes::from(jpeg_bytes())).expect("parse jpeg");
    jpeg.set_exif(Some(Bytes::from(exif.to_vec())));
    let mut file = std::fs::File::create(path).expect("create jpeg");
    jpeg.encoder().write_to(&mut file).expect("write jpeg");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_directory_is_word_aligned_and_linked() {
        let blob = pittsburgh_exif();
        assert_eq!(&blob[..4], b"II*\0");
        // IFD0 holds Make, Model, Orientation and the GPS pointer.
        assert_eq!(u16::from_le_bytes([blob[8], blob[9]]), 4);
        let pointer_entry = 10 + 3 * 12;
        assert_eq!(
            u16::from_le_bytes([blob[pointer_entry], blob[pointer_entry + 1]]),
            GPS_IFD_POINTER
        );
        let offset = u32::from_le_bytes(blob[pointer_entry + 8..pointer_entry + 12].try_into().unwrap());
        assert_eq!(offset % 2, 0);
        assert_eq!(u16::from_le_bytes([blob[offset as usize], blob[offset as usize + 1]]), 4);
    }
}
