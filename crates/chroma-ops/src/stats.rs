//! Mean and standard deviation of a channel plane over a region.
//!
//! - [`region_stats`] - Statistics over a window clipped to the plane
//! - [`plane_stats`] - Statistics over a whole plane
//! - [`LabStats`] - Per-channel statistics of an image in Lab
//!
//! Both use two passes (mean first, then squared deviations) with `f32`
//! accumulation in row-major order, and the population standard deviation
//! (variance divided by the pixel count). The divisor is always the number
//! of pixels actually inside the plane, so a window hanging over the image
//! border is clipped rather than padded or wrapped.

use chroma_color::LabPlanes;
use chroma_core::Rect;

/// Mean and population standard deviation of a channel over a region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionStats {
    /// Arithmetic mean
    pub mean: f32,
    /// Population standard deviation
    pub std_dev: f32,
}

impl RegionStats {
    /// Creates stats from precomputed values.
    #[inline]
    pub const fn new(mean: f32, std_dev: f32) -> Self {
        Self { mean, std_dev }
    }
}

/// Computes [`RegionStats`] of `plane` over `window`.
///
/// `plane` is a row-major `width * height` channel. The window is
/// intersected with the plane bounds first; statistics cover exactly the
/// pixels that remain.
///
/// The clipped window must be non-empty (its origin inside the plane).
/// Otherwise the result is NaN, and debug builds panic.
///
/// # Example
///
/// ```rust
/// use chroma_core::Rect;
/// use chroma_ops::stats::region_stats;
///
/// // 3x2 plane, window covering the right column only after clipping
/// let plane = [0.0, 0.0, 1.0,
///              0.0, 0.0, 3.0];
/// let s = region_stats(&plane, 3, 2, Rect::square(2, 0, 32));
/// assert_eq!(s.mean, 2.0);
/// assert_eq!(s.std_dev, 1.0);
/// ```
pub fn region_stats(plane: &[f32], width: u32, height: u32, window: Rect) -> RegionStats {
    debug_assert_eq!(plane.len(), width as usize * height as usize);
    let clip = window.clamp_to(width, height).unwrap_or_default();
    debug_assert!(!clip.is_empty(), "window {} outside {}x{} plane", window, width, height);

    let count = clip.area() as f32;
    let stride = width as usize;
    let rows = (clip.y as usize..clip.bottom() as usize)
        .map(move |y| &plane[y * stride + clip.x as usize..y * stride + clip.right() as usize]);

    let mut sum = 0.0f32;
    for row in rows.clone() {
        for &v in row {
            sum += v;
        }
    }
    let mean = sum / count;

    let mut variance = 0.0f32;
    for row in rows {
        for &v in row {
            let diff = v - mean;
            variance += diff * diff;
        }
    }

    RegionStats::new(mean, (variance / count).sqrt())
}

/// Computes [`RegionStats`] over every value of `plane`.
///
/// Equivalent to [`region_stats`] with a window covering the whole image.
///
/// ```rust
/// use chroma_ops::stats::plane_stats;
///
/// let s = plane_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert_eq!(s.mean, 5.0);
/// assert_eq!(s.std_dev, 2.0);
/// ```
pub fn plane_stats(plane: &[f32]) -> RegionStats {
    debug_assert!(!plane.is_empty(), "statistics of an empty plane");
    let count = plane.len() as f32;

    let mut sum = 0.0f32;
    for &v in plane {
        sum += v;
    }
    let mean = sum / count;

    let mut variance = 0.0f32;
    for &v in plane {
        let diff = v - mean;
        variance += diff * diff;
    }

    RegionStats::new(mean, (variance / count).sqrt())
}

/// Whole-image statistics for each Lab channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabStats {
    /// Lightness statistics
    pub l: RegionStats,
    /// a statistics
    pub a: RegionStats,
    /// b statistics
    pub b: RegionStats,
}

impl LabStats {
    /// Computes statistics of all three planes.
    pub fn from_planes(planes: &LabPlanes) -> Self {
        Self {
            l: plane_stats(&planes.l),
            a: plane_stats(&planes.a),
            b: plane_stats(&planes.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp(width: u32, height: u32) -> Vec<f32> {
        (0..width * height).map(|i| i as f32).collect()
    }

    #[test]
    fn test_constant_plane() {
        let plane = vec![3.5f32; 64];
        let s = region_stats(&plane, 8, 8, Rect::from_size(8, 8));
        assert_eq!(s, RegionStats::new(3.5, 0.0));
    }

    #[test]
    fn test_population_std() {
        // [1, 3]: mean 2, population variance 1 (sample variance would be 2)
        let s = plane_stats(&[1.0, 3.0]);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.std_dev, 1.0);
    }

    #[test]
    fn test_region_matches_plane_for_full_window() {
        let plane = ramp(13, 7);
        let full = region_stats(&plane, 13, 7, Rect::from_size(13, 7));
        assert_eq!(full, plane_stats(&plane));
    }

    #[test]
    fn test_interior_window() {
        // 4x4 ramp, window (1,1) 2x2 -> values 5, 6, 9, 10
        let plane = ramp(4, 4);
        let s = region_stats(&plane, 4, 4, Rect::new(1, 1, 2, 2));
        assert_eq!(s.mean, 7.5);
        assert_abs_diff_eq!(s.std_dev, 2.0615528, epsilon = 1e-5);
    }

    #[test]
    fn test_border_window_is_clipped() {
        // 40x40 plane: ones in x < 32, value 5 in the 8-wide right strip
        let (w, h) = (40u32, 40u32);
        let plane: Vec<f32> = (0..w * h)
            .map(|i| if i % w < 32 { 1.0 } else { 5.0 })
            .collect();

        // Tile at (32, 0) sees only the strip: 8x32 pixels, all equal to 5
        let s = region_stats(&plane, w, h, Rect::square(32, 0, 32));
        assert_eq!(s, RegionStats::new(5.0, 0.0));

        // A padded 32x32 average would have pulled in zeros or wrapped ones
        let corner = region_stats(&plane, w, h, Rect::square(32, 32, 32));
        assert_eq!(corner, RegionStats::new(5.0, 0.0));
    }

    #[test]
    fn test_clipped_divisor_counts_real_pixels() {
        // 40x40 ramp by column; tile (32,0) covers columns 32..40 only
        let (w, h) = (40u32, 40u32);
        let plane: Vec<f32> = (0..w * h).map(|i| (i % w) as f32).collect();
        let s = region_stats(&plane, w, h, Rect::square(32, 0, 32));
        // mean of 32..=39
        assert_eq!(s.mean, 35.5);
        // population std of 8 consecutive integers: sqrt((8^2 - 1) / 12)
        assert_abs_diff_eq!(s.std_dev, (63.0f32 / 12.0).sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_lab_stats() {
        let planes = LabPlanes {
            width: 2,
            height: 1,
            l: vec![10.0, 30.0],
            a: vec![-1.0, 1.0],
            b: vec![4.0, 4.0],
        };
        let s = LabStats::from_planes(&planes);
        assert_eq!(s.l, RegionStats::new(20.0, 10.0));
        assert_eq!(s.a, RegionStats::new(0.0, 1.0));
        assert_eq!(s.b, RegionStats::new(4.0, 0.0));
    }
}
