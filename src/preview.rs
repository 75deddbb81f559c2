//! Brightness/contrast-adjusted preview thumbnails.

use eyre::Result;
use eyre::eyre;
use image::DynamicImage;
use image::ImageFormat;
use image::RgbImage;
use image::RgbaImage;
use image::imageops::FilterType;
use std::io::Cursor;
use std::path::Path;

/// Edge length previews are fit into by default.
pub const DEFAULT_PREVIEW_SIZE: u32 = 400;

/// Preview adjustment settings. Factors of 1.0 leave the image unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewSettings {
    /// Multiplier applied to every color channel.
    pub brightness: f32,
    /// Distance from the mean gray level is scaled by this factor.
    pub contrast: f32,
    /// Longest edge of the output, never upscaled.
    pub max_size: u32,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            max_size: DEFAULT_PREVIEW_SIZE,
        }
    }
}

/// Result of rendering a preview
#[derive(Clone, Debug)]
pub struct RenderedPreview {
    /// PNG encoded preview
    pub data: Vec<u8>,
    pub original_width: u32,
    pub original_height: u32,
    pub output_width: u32,
    pub output_height: u32,
}

/// Load an image and render its adjusted preview
pub fn render_preview(path: &Path, settings: &PreviewSettings) -> Result<RenderedPreview> {
    let img = image::open(path)
        .map_err(|e| eyre!("Failed to open image {}: {}", path.display(), e))?;

    let original_width = img.width();
    let original_height = img.height();

    let adjusted = adjust(&img, settings.brightness, settings.contrast);
    let flattened = flatten_onto_white(&adjusted);
    let preview = fit_within(flattened, settings.max_size);

    let mut data = Vec::new();
    DynamicImage::ImageRgb8(preview.clone())
        .write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
        .map_err(|e| eyre!("Failed to encode preview: {}", e))?;

    Ok(RenderedPreview {
        data,
        original_width,
        original_height,
        output_width: preview.width(),
        output_height: preview.height(),
    })
}

/// Apply brightness then contrast to the color channels; alpha is untouched.
pub fn adjust(img: &DynamicImage, brightness: f32, contrast: f32) -> RgbaImage {
    let mut rgba = img.to_rgba8();

    if (brightness - 1.0).abs() > f32::EPSILON {
        for pixel in rgba.pixels_mut() {
            for c in &mut pixel.0[..3] {
                *c = clamp_channel(f32::from(*c) * brightness);
            }
        }
    }

    if (contrast - 1.0).abs() > f32::EPSILON {
        let mean = mean_luma(&rgba);
        for pixel in rgba.pixels_mut() {
            for c in &mut pixel.0[..3] {
                *c = clamp_channel(mean + (f32::from(*c) - mean) * contrast);
            }
        }
    }

    rgba
}

/// Mean ITU-R 601 luma, rounded to the nearest gray level.
fn mean_luma(img: &RgbaImage) -> f32 {
    let pixels = u64::from(img.width()) * u64::from(img.height());
    if pixels == 0 {
        return 0.0;
    }
    let total: u64 = img
        .pixels()
        .map(|p| {
            let [r, g, b, _] = p.0;
            (u64::from(r) * 299 + u64::from(g) * 587 + u64::from(b) * 114) / 1000
        })
        .sum();
    #[expect(clippy::cast_precision_loss)]
    let mean = total as f32 / pixels as f32;
    mean.round()
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Composite over an opaque white background.
pub fn flatten_onto_white(img: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let a = u16::from(a);
        let blend = |c: u8| {
            u8::try_from((u16::from(c) * a + 255 * (255 - a) + 127) / 255).unwrap_or(u8::MAX)
        };
        image::Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Shrink to fit a `max_size` square, keeping aspect ratio; smaller images pass through.
pub fn fit_within(img: RgbImage, max_size: u32) -> RgbImage {
    if max_size == 0 || (img.width() <= max_size && img.height() <= max_size) {
        return img;
    }
    DynamicImage::ImageRgb8(img)
        .resize(max_size, max_size, FilterType::Lanczos3)
        .to_rgb8()
}
