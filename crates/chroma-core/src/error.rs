//! Error types for chroma-core operations.
//!
//! The transfer engine has a single precondition failure (mismatched image
//! sizes in patch mode). Everything else here guards buffer construction.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Error, Result};
//!
//! fn same_size(a: (u32, u32), b: (u32, u32)) -> Result<()> {
//!     if a != b {
//!         return Err(Error::dimension_mismatch(a, b));
//!     }
//!     Ok(())
//! }
//!
//! assert!(same_size((10, 10), (10, 11)).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by chroma image and transfer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Two images that must correspond pixel-to-pixel have different sizes.
    ///
    /// Raised by patch-local transfer before any conversion happens.
    #[error("dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    DimensionMismatch {
        /// Width of the image that sets the expected size
        expected_width: u32,
        /// Height of the image that sets the expected size
        expected_height: u32,
        /// Width of the offending image
        actual_width: u32,
        /// Height of the offending image
        actual_height: u32,
    },

    /// Buffer length does not agree with the declared dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Why the dimensions were rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(expected: (u32, u32), actual: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            expected_width: expected.0,
            expected_height: expected.1,
            actual_width: actual.0,
            actual_height: actual.1,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a size-correspondence error.
    #[inline]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}
