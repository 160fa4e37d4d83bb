//! # chroma-core
//!
//! Core types shared by the chroma transfer crates.
//!
//! - [`RgbImage`] - Owned 8-bit RGB buffer, row-major
//! - [`Rect`] - Regions and tile grids for windowed statistics
//! - [`Error`], [`Result`] - Error handling
//!
//! ## Crate Structure
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-color (sRGB <-> Lab codec)
//!    +-- chroma-ops (statistics, color transfer)
//!    +-- chroma-cli (file I/O front end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod rect;

pub use error::{Error, Result};
pub use image::{RgbImage, CHANNELS};
pub use rect::Rect;
