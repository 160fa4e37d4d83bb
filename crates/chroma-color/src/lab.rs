//! Per-pixel sRGB <-> CIELAB conversion (D65).
//!
//! # Pipeline
//!
//! ```text
//! sRGB [0,1] --eotf--> linear RGB --SRGB_TO_XYZ--> XYZ --/white, f(t)--> Lab
//! Lab --f^-1(t), *white--> XYZ --XYZ_TO_SRGB--> linear RGB --oetf, clamp--> sRGB
//! ```
//!
//! The forward path never clamps; NaN or negative inputs propagate. The
//! inverse path clamps each sRGB channel to [0, 1] as its last step, which
//! absorbs every out-of-gamut a/b excursion.
//!
//! # Example
//!
//! ```rust
//! use chroma_color::lab::{rgb_to_lab, lab_to_rgb};
//!
//! let rgb = [0.5_f32, 0.3, 0.2];
//! let back = lab_to_rgb(rgb_to_lab(rgb));
//! assert!((back[0] - rgb[0]).abs() < 1e-3);
//! ```

use crate::matrix::{D65_WHITE, SRGB_TO_XYZ, XYZ_TO_SRGB};
use crate::srgb;

/// CIE threshold separating the cube-root and linear segments of `f(t)`.
pub const LAB_EPSILON: f32 = 0.008856;

/// Slope of the linear segment of `f(t)`.
pub const LAB_KAPPA_SLOPE: f32 = 7.787;

const LAB_OFFSET: f32 = 16.0 / 116.0;

/// A CIELAB color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (white)
    pub l: f32,
    /// Green (negative) to red (positive)
    pub a: f32,
    /// Blue (negative) to yellow (positive)
    pub b: f32,
}

impl Lab {
    /// Creates a Lab color.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Drops the lightness channel.
    #[inline]
    pub const fn chroma(&self) -> Chroma {
        Chroma::new(self.a, self.b)
    }
}

/// The chrominance half of a Lab color, for callers that never use L.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chroma {
    /// Green (negative) to red (positive)
    pub a: f32,
    /// Blue (negative) to yellow (positive)
    pub b: f32,
}

impl Chroma {
    /// Creates a chroma pair.
    #[inline]
    pub const fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    /// Clamps both channels to `[-limit, limit]`.
    #[inline]
    pub fn clamp(self, limit: f32) -> Self {
        Self::new(self.a.clamp(-limit, limit), self.b.clamp(-limit, limit))
    }

    /// Re-attaches a lightness value.
    #[inline]
    pub const fn with_lightness(self, l: f32) -> Lab {
        Lab::new(l, self.a, self.b)
    }
}

/// CIE `f(t)`: cube root above [`LAB_EPSILON`], linear below.
#[inline]
pub fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        LAB_KAPPA_SLOPE * t + LAB_OFFSET
    }
}

/// Inverse of [`lab_f`]. The branch is chosen on `f^3`.
#[inline]
pub fn lab_f_inv(f: f32) -> f32 {
    let cube = f.powf(3.0);
    if cube > LAB_EPSILON {
        cube
    } else {
        (f - LAB_OFFSET) / LAB_KAPPA_SLOPE
    }
}

/// Gamma-encoded sRGB [0, 1] to CIE XYZ.
#[inline]
pub fn rgb_to_xyz(rgb: [f32; 3]) -> [f32; 3] {
    debug_assert!(rgb.iter().all(|c| c.is_finite()), "non-finite sRGB input {rgb:?}");
    SRGB_TO_XYZ.transform(srgb::eotf_rgb(rgb))
}

/// Normalizes XYZ by the D65 white and applies `f` per component.
#[inline]
fn xyz_to_f(xyz: [f32; 3]) -> [f32; 3] {
    [
        lab_f(xyz[0] / D65_WHITE[0]),
        lab_f(xyz[1] / D65_WHITE[1]),
        lab_f(xyz[2] / D65_WHITE[2]),
    ]
}

/// CIE XYZ to Lab.
#[inline]
pub fn xyz_to_lab(xyz: [f32; 3]) -> Lab {
    let [fx, fy, fz] = xyz_to_f(xyz);
    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// CIE XYZ to the a/b pair only; L is never computed.
#[inline]
pub fn xyz_to_ab(xyz: [f32; 3]) -> Chroma {
    let [fx, fy, fz] = xyz_to_f(xyz);
    Chroma::new(500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// sRGB [0, 1] to Lab.
#[inline]
pub fn rgb_to_lab(rgb: [f32; 3]) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// sRGB [0, 1] to a/b, skipping lightness.
#[inline]
pub fn rgb_to_ab(rgb: [f32; 3]) -> Chroma {
    xyz_to_ab(rgb_to_xyz(rgb))
}

/// Lab to CIE XYZ.
#[inline]
pub fn lab_to_xyz(lab: Lab) -> [f32; 3] {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    [
        lab_f_inv(fx) * D65_WHITE[0],
        lab_f_inv(fy) * D65_WHITE[1],
        lab_f_inv(fz) * D65_WHITE[2],
    ]
}

/// CIE XYZ to gamma-encoded sRGB, clamped to [0, 1].
#[inline]
pub fn xyz_to_rgb(xyz: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = srgb::oetf_rgb(XYZ_TO_SRGB.transform(xyz));
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

/// Lab to sRGB [0, 1]. Out-of-gamut results are clamped, never rejected.
#[inline]
pub fn lab_to_rgb(lab: Lab) -> [f32; 3] {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// 8-bit sample to [0, 1].
#[inline]
pub fn u8_to_unit(v: u8) -> f32 {
    v as f32 / 255.0
}

/// [0, 1] to an 8-bit sample, truncating toward zero.
#[inline]
pub fn unit_to_u8(v: f32) -> u8 {
    (v * 255.0) as u8
}

/// 8-bit RGB pixel to [0, 1] floats.
#[inline]
pub fn rgb_u8_to_unit(p: [u8; 3]) -> [f32; 3] {
    [u8_to_unit(p[0]), u8_to_unit(p[1]), u8_to_unit(p[2])]
}

/// [0, 1] float pixel to truncated 8-bit RGB.
#[inline]
pub fn rgb_unit_to_u8(p: [f32; 3]) -> [u8; 3] {
    [unit_to_u8(p[0]), unit_to_u8(p[1]), unit_to_u8(p[2])]
}
