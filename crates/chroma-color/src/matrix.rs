//! sRGB primaries and D65 white point.
//!
//! # Convention
//!
//! Matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | r |   | m00*r + m01*g + m02*b |
//! | m10 m11 m12 | * | g | = | m10*r + m11*g + m12*b |
//! | m20 m21 m22 |   | b |   | m20*r + m21*g + m22*b |
//! ```
//!
//! The coefficients are the four-digit sRGB/D65 values; they are fixed so
//! that output bytes stay reproducible.

/// A 3x3 matrix for linear color transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Multiplies a column vector, summing each row left to right.
    ///
    /// ```rust
    /// use chroma_color::matrix::Mat3;
    ///
    /// let swap = Mat3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
    /// assert_eq!(swap.transform([0.25, 0.5, 1.0]), [0.5, 0.25, 2.0]);
    /// ```
    #[inline]
    pub fn transform(&self, v: [f32; 3]) -> [f32; 3] {
        let m = &self.m;
        [
            v[0] * m[0][0] + v[1] * m[0][1] + v[2] * m[0][2],
            v[0] * m[1][0] + v[1] * m[1][1] + v[2] * m[1][2],
            v[0] * m[2][0] + v[1] * m[2][1] + v[2] * m[2][2],
        ]
    }
}

/// Linear sRGB to CIE XYZ (D65).
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// CIE XYZ (D65) to linear sRGB.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
]);

/// D65 reference white in XYZ (Y normalized to 1).
pub const D65_WHITE: [f32; 3] = [0.95047, 1.0, 1.08883];
