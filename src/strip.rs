//! Writing a copy of an image without its metadata.

use eyre::eyre;
use img_parts::Bytes;
use img_parts::DynImage;
use img_parts::jpeg::Jpeg;
use img_parts::png::Png;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

/// APP1 carries EXIF and XMP.
const JPEG_APP1: u8 = 0xE1;
/// APP13 carries IPTC / Photoshop resources.
const JPEG_APP13: u8 = 0xED;
const JPEG_COM: u8 = 0xFE;

const PNG_METADATA_CHUNKS: [[u8; 4]; 5] = [*b"tEXt", *b"iTXt", *b"zTXt", *b"eXIf", *b"tIME"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripMethod {
    /// Metadata segments removed, pixel data copied byte for byte.
    Lossless,
    /// Decoded and encoded again; the encoder writes no metadata.
    Reencoded,
}

/// Copies `src` to `dst` without metadata.
///
/// JPEG loses its APP1 (EXIF, XMP), APP13 (IPTC) and comment segments and PNG
/// its text, `eXIf` and `tIME` chunks; both keep their encoded pixels. Every
/// other format is decoded and saved in the format `dst`'s extension names.
pub fn strip_metadata(src: &Path, dst: &Path) -> eyre::Result<StripMethod> {
    if src == dst {
        return Err(eyre!("Refusing to overwrite the source image {}", src.display()));
    }
    let data = std::fs::read(src)?;

    let parsed = DynImage::from_bytes(Bytes::from(data))
        .map_err(|e| eyre!("Failed to parse {}: {}", src.display(), e))?;
    let stripped = match parsed {
        Some(DynImage::Jpeg(mut jpeg)) => {
            strip_jpeg(&mut jpeg);
            Some(DynImage::Jpeg(jpeg))
        }
        Some(DynImage::Png(mut png)) => {
            strip_png(&mut png);
            Some(DynImage::Png(png))
        }
        _ => None,
    };

    if let Some(image) = stripped {
        let mut out = BufWriter::new(File::create(dst)?);
        image.encoder().write_to(&mut out)?;
        debug!(src = %src.display(), dst = %dst.display(), "Stripped metadata segments");
        return Ok(StripMethod::Lossless);
    }

    let img = image::open(src).map_err(|e| eyre!("Failed to open image {}: {}", src.display(), e))?;
    img.save(dst)
        .map_err(|e| eyre!("Failed to write {}: {}", dst.display(), e))?;
    debug!(src = %src.display(), dst = %dst.display(), "Re-encoded without metadata");
    Ok(StripMethod::Reencoded)
}

fn strip_jpeg(jpeg: &mut Jpeg) {
    jpeg.segments_mut()
        .retain(|s| !matches!(s.marker(), JPEG_APP1 | JPEG_APP13 | JPEG_COM));
}

fn strip_png(png: &mut Png) {
    png.chunks_mut()
        .retain(|c| !PNG_METADATA_CHUNKS.contains(&c.kind()));
}
