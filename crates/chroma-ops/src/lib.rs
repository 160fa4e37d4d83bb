//! # chroma-ops
//!
//! Colorizes a grayscale image from a color reference by matching Lab
//! chrominance statistics.
//!
//! # Modules
//!
//! - [`stats`] - Mean / population standard deviation over clipped regions
//! - [`transfer`] - Global and patch-local color transfer
//!
//! # Example
//!
//! ```rust
//! use chroma_core::RgbImage;
//! use chroma_ops::{transfer, TransferOptions};
//!
//! let gray = RgbImage::from_luma(3, 1, vec![30, 120, 240]).unwrap();
//! let reference = RgbImage::from_raw(2, 1, vec![220, 120, 40, 180, 80, 20]).unwrap();
//!
//! // Global statistics do not need matching sizes
//! let colored = transfer(&gray, &reference, &TransferOptions::global()).unwrap();
//! assert_eq!(colored.dimensions(), (3, 1));
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Per-pixel and per-tile-row work on rayon.
//!   Statistics are always summed sequentially, so output bytes do not
//!   depend on this flag or on the thread count.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod stats;
pub mod transfer;

pub use chroma_core::{Error, Result};
pub use stats::{plane_stats, region_stats, LabStats, RegionStats};
pub use transfer::{
    transfer, transfer_global, transfer_patch, TransferMode, TransferOptions, GLOBAL_AB_LIMIT,
    PATCH_AB_LIMIT, PATCH_SIZE, PATCH_STD_EPSILON,
};
