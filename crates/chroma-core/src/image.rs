//! Owned 8-bit RGB image buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored row-major, top-to-bottom, channels interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  ← Row 0
//!         [R G B R G B R G B ...]  ← Row 1
//! ```
//!
//! Grayscale sources are expanded to three equal channels on construction,
//! so the transfer engine only ever sees one layout.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::RgbImage;
//!
//! let gray = RgbImage::from_luma(2, 1, vec![10, 200]).unwrap();
//! assert_eq!(gray.pixel(1, 0), [200, 200, 200]);
//! assert_eq!(gray.as_bytes().len(), 2 * 1 * 3);
//! ```

use crate::{Error, Result};

/// Number of interleaved channels in an [`RgbImage`].
pub const CHANNELS: usize = 3;

/// Owned row-major RGB buffer with 8-bit samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Creates an image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; pixel_count(width, height) * CHANNELS],
        }
    }

    /// Wraps an interleaved RGB buffer of length `width * height * 3`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when the buffer length disagrees
    /// with the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = checked_len(width, height, CHANNELS)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Expands a single-channel luma buffer into three equal channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when `luma.len() != width * height`.
    pub fn from_luma(width: u32, height: u32, luma: Vec<u8>) -> Result<Self> {
        let expected = checked_len(width, height, 1)?;
        if luma.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} luma samples, got {}", expected, luma.len()),
            ));
        }
        let data = luma.iter().flat_map(|&v| [v, v, v]).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        pixel_count(self.width, self.height)
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Writes the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.data[idx..idx + CHANNELS].copy_from_slice(&rgb);
    }

    /// Iterates pixels in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(CHANNELS).map(|p| [p[0], p[1], p[2]])
    }

    /// Raw interleaved bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw interleaved bytes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image, returning the interleaved buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

fn checked_len(width: u32, height: u32, channels: usize) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_validates_length() {
        assert!(RgbImage::from_raw(2, 2, vec![0; 12]).is_ok());
        let err = RgbImage::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_from_luma_expands() {
        let img = RgbImage::from_luma(3, 1, vec![1, 2, 3]).unwrap();
        assert_eq!(img.as_bytes(), &[1, 1, 1, 2, 2, 2, 3, 3, 3]);
        assert!(RgbImage::from_luma(3, 1, vec![1, 2]).is_err());
    }

    #[test]
    fn test_pixel_access() {
        let mut img = RgbImage::new(4, 3);
        img.set_pixel(3, 2, [10, 20, 30]);
        assert_eq!(img.pixel(3, 2), [10, 20, 30]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0]);
        assert_eq!(img.as_bytes()[(2 * 4 + 3) * 3], 10);
    }

    #[test]
    fn test_pixels_iter() {
        let img = RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let px: Vec<_> = img.pixels().collect();
        assert_eq!(px, vec![[1, 2, 3], [4, 5, 6]]);
        assert_eq!(img.len(), 2);
        assert!(!img.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_pixel_out_of_bounds() {
        RgbImage::new(2, 2).pixel(2, 0);
    }
}
