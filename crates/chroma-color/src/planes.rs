//! Whole-image conversion into separate Lab channel planes.
//!
//! Each plane is a flat `Vec<f32>` of length `width * height` in the same
//! row-major pixel order as the source [`RgbImage`]. L lives in its own plane
//! because only a/b are ever remapped.
//!
//! # Example
//!
//! ```rust
//! use chroma_core::RgbImage;
//! use chroma_color::planes::{LabPlanes, ChromaPlanes};
//!
//! let img = RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
//! let lab = LabPlanes::from_image(&img);
//! let ab = ChromaPlanes::from_image(&img);
//! assert_eq!(lab.a, ab.a);
//! assert_eq!(lab.l.len(), 2);
//! ```

use chroma_core::{RgbImage, CHANNELS};
#[allow(unused_imports)]
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::lab::{rgb_to_ab, rgb_to_lab, rgb_u8_to_unit};

/// L, a and b planes of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct LabPlanes {
    /// Plane width in pixels
    pub width: u32,
    /// Plane height in pixels
    pub height: u32,
    /// Lightness per pixel
    pub l: Vec<f32>,
    /// a per pixel
    pub a: Vec<f32>,
    /// b per pixel
    pub b: Vec<f32>,
}

/// a and b planes of an image; lightness is never computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromaPlanes {
    /// Plane width in pixels
    pub width: u32,
    /// Plane height in pixels
    pub height: u32,
    /// a per pixel
    pub a: Vec<f32>,
    /// b per pixel
    pub b: Vec<f32>,
}

impl LabPlanes {
    /// Converts every pixel of `image` to Lab.
    pub fn from_image(image: &RgbImage) -> Self {
        trace!(width = image.width(), height = image.height(), "LabPlanes::from_image");
        let n = image.len();
        let mut l = vec![0.0f32; n];
        let mut a = vec![0.0f32; n];
        let mut b = vec![0.0f32; n];
        let src = image.as_bytes();

        #[cfg(feature = "parallel")]
        l.par_iter_mut()
            .zip(a.par_iter_mut())
            .zip(b.par_iter_mut())
            .zip(src.par_chunks_exact(CHANNELS))
            .for_each(|(((l, a), b), px)| {
                let lab = rgb_to_lab(rgb_u8_to_unit([px[0], px[1], px[2]]));
                (*l, *a, *b) = (lab.l, lab.a, lab.b);
            });

        #[cfg(not(feature = "parallel"))]
        for (i, px) in src.chunks_exact(CHANNELS).enumerate() {
            let lab = rgb_to_lab(rgb_u8_to_unit([px[0], px[1], px[2]]));
            (l[i], a[i], b[i]) = (lab.l, lab.a, lab.b);
        }

        Self {
            width: image.width(),
            height: image.height(),
            l,
            a,
            b,
        }
    }

    /// Number of pixels per plane.
    #[inline]
    pub fn len(&self) -> usize {
        self.l.len()
    }

    /// Returns `true` if the planes are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.l.is_empty()
    }
}

impl ChromaPlanes {
    /// Converts every pixel of `image` to a/b.
    pub fn from_image(image: &RgbImage) -> Self {
        trace!(width = image.width(), height = image.height(), "ChromaPlanes::from_image");
        let n = image.len();
        let mut a = vec![0.0f32; n];
        let mut b = vec![0.0f32; n];
        let src = image.as_bytes();

        #[cfg(feature = "parallel")]
        a.par_iter_mut()
            .zip(b.par_iter_mut())
            .zip(src.par_chunks_exact(CHANNELS))
            .for_each(|((a, b), px)| {
                let ab = rgb_to_ab(rgb_u8_to_unit([px[0], px[1], px[2]]));
                (*a, *b) = (ab.a, ab.b);
            });

        #[cfg(not(feature = "parallel"))]
        for (i, px) in src.chunks_exact(CHANNELS).enumerate() {
            let ab = rgb_to_ab(rgb_u8_to_unit([px[0], px[1], px[2]]));
            (a[i], b[i]) = (ab.a, ab.b);
        }

        Self {
            width: image.width(),
            height: image.height(),
            a,
            b,
        }
    }

    /// Number of pixels per plane.
    #[inline]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns `true` if the planes are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::rgb_to_lab;

    #[test]
    fn test_plane_order_matches_pixels() {
        let img = RgbImage::from_raw(2, 2, vec![
            255, 0, 0, 0, 255, 0,
            0, 0, 255, 128, 128, 128,
        ])
        .unwrap();
        let planes = LabPlanes::from_image(&img);
        assert_eq!(planes.len(), 4);
        for (i, px) in img.pixels().enumerate() {
            let lab = rgb_to_lab(rgb_u8_to_unit(px));
            assert_eq!(planes.l[i], lab.l);
            assert_eq!(planes.a[i], lab.a);
            assert_eq!(planes.b[i], lab.b);
        }
    }

    #[test]
    fn test_chroma_matches_lab() {
        let img = RgbImage::from_raw(3, 1, vec![10, 20, 30, 200, 100, 50, 0, 0, 0]).unwrap();
        let lab = LabPlanes::from_image(&img);
        let ab = ChromaPlanes::from_image(&img);
        assert_eq!((&lab.a, &lab.b), (&ab.a, &ab.b));
        assert_eq!((ab.width, ab.height), (3, 1));
    }

    #[test]
    fn test_gray_image_has_neutral_chroma() {
        let img = RgbImage::from_luma(4, 1, vec![0, 64, 128, 255]).unwrap();
        let planes = ChromaPlanes::from_image(&img);
        assert!(planes.a.iter().all(|v| v.abs() < 0.1));
        assert!(planes.b.iter().all(|v| v.abs() < 0.1));
    }

    #[test]
    fn test_empty_image() {
        let img = RgbImage::new(0, 0);
        assert!(LabPlanes::from_image(&img).is_empty());
        assert!(ChromaPlanes::from_image(&img).is_empty());
    }
}
