//! CLI command implementations

pub mod stats;
pub mod transfer;

use anyhow::{Context, Result};
use chroma_core::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Load image from path as single-channel luma, expanded to RGB
pub fn load_gray(path: &Path) -> Result<RgbImage> {
    let luma = image::open(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?
        .to_luma8();
    let (w, h) = luma.dimensions();
    Ok(RgbImage::from_luma(w, h, luma.into_raw())?)
}

/// Load image from path as 8-bit RGB
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let rgb = image::open(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?
        .to_rgb8();
    let (w, h) = rgb.dimensions();
    Ok(RgbImage::from_raw(w, h, rgb.into_raw())?)
}

/// Save image to path
///
/// `.jpg`/`.jpeg` (and paths without an extension) are encoded as JPEG at
/// `quality`; anything else goes by extension.
pub fn save_image(path: &Path, image: &RgbImage, quality: u8) -> Result<()> {
    let (w, h) = image.dimensions();
    if is_jpeg(path) {
        let file = File::create(path)
            .with_context(|| format!("Failed to create: {}", path.display()))?;
        JpegEncoder::new_with_quality(BufWriter::new(file), quality)
            .encode(image.as_bytes(), w, h, ExtendedColorType::Rgb8)
            .with_context(|| format!("Failed to save: {}", path.display()))
    } else {
        image::save_buffer(path, image.as_bytes(), w, h, ExtendedColorType::Rgb8)
            .with_context(|| format!("Failed to save: {}", path.display()))
    }
}

fn is_jpeg(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg"),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_jpeg() {
        assert!(is_jpeg(Path::new("out.jpg")));
        assert!(is_jpeg(Path::new("OUT.JPEG")));
        assert!(is_jpeg(Path::new("out")));
        assert!(!is_jpeg(Path::new("out.png")));
    }
}
