//! Statistical color transfer from a reference image onto a grayscale one.
//!
//! Both images are converted to Lab. The grayscale image keeps its own L;
//! its a/b channels are remapped by an affine transform that gives them the
//! mean and standard deviation of the reference's a/b.
//!
//! # Modes
//!
//! - [`TransferMode::Global`] - One set of statistics for the whole image.
//!   The images may differ in size.
//! - [`TransferMode::Patch`] - Independent statistics per square tile
//!   (default side [`PATCH_SIZE`]). The images must have equal size because
//!   low-variance tiles copy the reference's a/b at the same position.
//!
//! Tiles are not blended; seams at tile edges are expected output.
//!
//! # Clamping
//!
//! Remapped a/b are clamped before the inverse transform: to
//! ±[`GLOBAL_AB_LIMIT`] in global mode and ±[`PATCH_AB_LIMIT`] in patch mode.
//!
//! # Example
//!
//! ```rust
//! use chroma_core::RgbImage;
//! use chroma_ops::transfer::{transfer, TransferOptions};
//!
//! let gray = RgbImage::from_luma(2, 2, vec![40, 90, 160, 220]).unwrap();
//! let reference = RgbImage::from_raw(2, 2, vec![
//!     200, 40, 30,   180, 60, 20,
//!     220, 90, 60,   150, 30, 10,
//! ]).unwrap();
//!
//! let out = transfer(&gray, &reference, &TransferOptions::patch()).unwrap();
//! assert_eq!(out.dimensions(), (2, 2));
//! ```

use chroma_color::{lab_to_rgb, rgb_unit_to_u8, Chroma, ChromaPlanes, LabPlanes};
use chroma_core::{Error, Rect, Result, RgbImage, CHANNELS};
#[allow(unused_imports)]
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::stats::{plane_stats, region_stats, RegionStats};

/// Default tile side for patch-local transfer.
pub const PATCH_SIZE: u32 = 32;

/// a/b clamp bound for global transfer.
pub const GLOBAL_AB_LIMIT: f32 = 127.0;

/// a/b clamp bound for patch transfer.
pub const PATCH_AB_LIMIT: f32 = 128.0;

/// Tiles whose source standard deviation is at or below this copy the
/// reference a/b instead of remapping. Also added to the divisor.
pub const PATCH_STD_EPSILON: f32 = 1e-3;

/// Where statistics are gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    /// Whole-image statistics.
    #[default]
    Global,
    /// Per-tile statistics; requires equal image sizes.
    Patch,
}

impl TransferMode {
    /// Lowercase name, as accepted on the command line.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Patch => "patch",
        }
    }
}

impl std::fmt::Display for TransferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Transfer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOptions {
    /// Statistics mode
    pub mode: TransferMode,
    /// Tile side in patch mode; ignored in global mode
    pub tile_size: u32,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            mode: TransferMode::Global,
            tile_size: PATCH_SIZE,
        }
    }
}

impl TransferOptions {
    /// Global mode.
    pub fn global() -> Self {
        Self::default()
    }

    /// Patch mode with [`PATCH_SIZE`] tiles.
    pub fn patch() -> Self {
        Self {
            mode: TransferMode::Patch,
            ..Self::default()
        }
    }

    /// Overrides the tile side.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }
}

/// Runs the transfer selected by `options`.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] in patch mode when the images differ in size.
/// Global mode never fails.
///
/// # Panics
///
/// Panics in patch mode if `options.tile_size` is zero, and in global mode
/// if the reference is empty while the grayscale image is not.
pub fn transfer(gray: &RgbImage, reference: &RgbImage, options: &TransferOptions) -> Result<RgbImage> {
    match options.mode {
        TransferMode::Global => Ok(transfer_global(gray, reference)),
        TransferMode::Patch => transfer_patch(gray, reference, options.tile_size),
    }
}

/// Global-statistics transfer. Output has the grayscale image's size.
///
/// # Panics
///
/// Panics if `gray` has pixels but `reference` has none.
pub fn transfer_global(gray: &RgbImage, reference: &RgbImage) -> RgbImage {
    trace!(
        gray_w = gray.width(),
        gray_h = gray.height(),
        ref_w = reference.width(),
        ref_h = reference.height(),
        "transfer::global"
    );
    if gray.is_empty() {
        return RgbImage::new(gray.width(), gray.height());
    }
    assert!(
        !reference.is_empty(),
        "empty {}x{} reference has no chroma statistics",
        reference.width(),
        reference.height()
    );
    let src = LabPlanes::from_image(gray);
    let reference = ChromaPlanes::from_image(reference);
    let remapped = remap_global_planes(&src, &reference);
    compose(&src.l, &remapped, GLOBAL_AB_LIMIT)
}

/// Patch-local transfer over `tile_size` tiles.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] when the images differ in size; nothing is
/// converted or allocated in that case.
///
/// # Panics
///
/// Panics if `tile_size` is zero.
pub fn transfer_patch(gray: &RgbImage, reference: &RgbImage, tile_size: u32) -> Result<RgbImage> {
    trace!(
        width = gray.width(),
        height = gray.height(),
        tile_size,
        "transfer::patch"
    );
    if gray.dimensions() != reference.dimensions() {
        return Err(Error::dimension_mismatch(gray.dimensions(), reference.dimensions()));
    }
    assert!(tile_size > 0, "tile size must be > 0");

    let src = LabPlanes::from_image(gray);
    if src.is_empty() {
        return Ok(RgbImage::new(gray.width(), gray.height()));
    }
    let reference = ChromaPlanes::from_image(reference);
    let remapped = remap_patch_planes(&src, &reference, tile_size);
    Ok(compose(&src.l, &remapped, PATCH_AB_LIMIT))
}

/// Global affine remap of one value.
///
/// A flat source channel (`std_dev == 0`) maps to the reference mean.
#[inline]
pub fn remap_global(v: f32, src: RegionStats, reference: RegionStats) -> f32 {
    if src.std_dev != 0.0 {
        (v - src.mean) * (reference.std_dev / src.std_dev) + reference.mean
    } else {
        reference.mean
    }
}

/// Patch affine remap of one value.
///
/// A near-flat source tile falls back to `ref_v`, the reference value at
/// the same pixel.
#[inline]
pub fn remap_patch(v: f32, ref_v: f32, src: RegionStats, reference: RegionStats) -> f32 {
    if src.std_dev > PATCH_STD_EPSILON {
        (v - src.mean) * (reference.std_dev / (src.std_dev + PATCH_STD_EPSILON)) + reference.mean
    } else {
        ref_v
    }
}

/// Remaps the source a/b planes with whole-image statistics.
///
/// Returns the values before clamping.
pub fn remap_global_planes(src: &LabPlanes, reference: &ChromaPlanes) -> ChromaPlanes {
    let src_a = plane_stats(&src.a);
    let src_b = plane_stats(&src.b);
    let ref_a = plane_stats(&reference.a);
    let ref_b = plane_stats(&reference.b);
    debug!(
        src_a_mean = src_a.mean,
        src_a_std = src_a.std_dev,
        src_b_mean = src_b.mean,
        src_b_std = src_b.std_dev,
        ref_a_mean = ref_a.mean,
        ref_a_std = ref_a.std_dev,
        ref_b_mean = ref_b.mean,
        ref_b_std = ref_b.std_dev,
        "global statistics"
    );

    #[cfg(feature = "parallel")]
    let (a, b) = (
        src.a.par_iter().map(|&v| remap_global(v, src_a, ref_a)).collect(),
        src.b.par_iter().map(|&v| remap_global(v, src_b, ref_b)).collect(),
    );

    #[cfg(not(feature = "parallel"))]
    let (a, b) = (
        src.a.iter().map(|&v| remap_global(v, src_a, ref_a)).collect(),
        src.b.iter().map(|&v| remap_global(v, src_b, ref_b)).collect(),
    );

    ChromaPlanes {
        width: src.width,
        height: src.height,
        a,
        b,
    }
}

/// Remaps the source a/b planes tile by tile.
///
/// Both plane sets must share dimensions. Returns the values before
/// clamping.
pub fn remap_patch_planes(src: &LabPlanes, reference: &ChromaPlanes, tile_size: u32) -> ChromaPlanes {
    debug_assert_eq!((src.width, src.height), (reference.width, reference.height));
    let (width, height) = (src.width, src.height);
    let (cols, rows) = Rect::tile_grid(width, height, tile_size);
    debug!(cols, rows, tile_size, "patch grid");

    let n = src.len();
    let mut a = vec![0.0f32; n];
    let mut b = vec![0.0f32; n];
    if n == 0 {
        return ChromaPlanes { width, height, a, b };
    }

    // One band holds one row of tiles; bands never overlap.
    let band_len = width as usize * tile_size as usize;

    #[cfg(feature = "parallel")]
    a.par_chunks_mut(band_len)
        .zip(b.par_chunks_mut(band_len))
        .enumerate()
        .for_each(|(row, (band_a, band_b))| {
            remap_band(src, reference, tile_size, row as u32, band_a, band_b);
        });

    #[cfg(not(feature = "parallel"))]
    for (row, (band_a, band_b)) in a.chunks_mut(band_len).zip(b.chunks_mut(band_len)).enumerate() {
        remap_band(src, reference, tile_size, row as u32, band_a, band_b);
    }

    ChromaPlanes { width, height, a, b }
}

/// Remaps one row of tiles into band-local output slices.
fn remap_band(
    src: &LabPlanes,
    reference: &ChromaPlanes,
    tile_size: u32,
    row: u32,
    band_a: &mut [f32],
    band_b: &mut [f32],
) {
    let (width, height) = (src.width, src.height);
    let y0 = row * tile_size;
    let stride = width as usize;

    for tile in Rect::tile_row(width, height, tile_size, row) {
        let src_a = region_stats(&src.a, width, height, tile);
        let src_b = region_stats(&src.b, width, height, tile);
        let ref_a = region_stats(&reference.a, width, height, tile);
        let ref_b = region_stats(&reference.b, width, height, tile);
        trace!(
            x = tile.x,
            y = tile.y,
            w = tile.width,
            h = tile.height,
            src_a_std = src_a.std_dev,
            src_b_std = src_b.std_dev,
            "tile"
        );

        for (x, y) in tile.iter_coords() {
            let i = y as usize * stride + x as usize;
            let local = (y - y0) as usize * stride + x as usize;
            band_a[local] = remap_patch(src.a[i], reference.a[i], src_a, ref_a);
            band_b[local] = remap_patch(src.b[i], reference.b[i], src_b, ref_b);
        }
    }
}

/// Clamps a/b to `±limit`, joins them with `l` and encodes 8-bit sRGB.
///
/// Samples are truncated, not rounded.
pub fn compose(l: &[f32], chroma: &ChromaPlanes, limit: f32) -> RgbImage {
    debug_assert_eq!(l.len(), chroma.len());
    let mut out = RgbImage::new(chroma.width, chroma.height);

    let encode = |i: usize, px: &mut [u8]| {
        let lab = Chroma::new(chroma.a[i], chroma.b[i]).clamp(limit).with_lightness(l[i]);
        px.copy_from_slice(&rgb_unit_to_u8(lab_to_rgb(lab)));
    };

    #[cfg(feature = "parallel")]
    out.as_bytes_mut()
        .par_chunks_exact_mut(CHANNELS)
        .enumerate()
        .for_each(|(i, px)| encode(i, px));

    #[cfg(not(feature = "parallel"))]
    for (i, px) in out.as_bytes_mut().chunks_exact_mut(CHANNELS).enumerate() {
        encode(i, px);
    }

    out
}
