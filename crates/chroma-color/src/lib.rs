//! # chroma-color
//!
//! sRGB <-> CIELAB codec with fixed D65/sRGB assumptions.
//!
//! - [`srgb`] - sRGB transfer function (EOTF/OETF)
//! - [`matrix`] - sRGB/XYZ matrices and the D65 white point
//! - [`lab`] - Per-pixel Lab conversion, [`Lab`] and [`Chroma`] types
//! - [`planes`] - Whole-image conversion into L/a/b channel planes
//!
//! # Architecture
//!
//! ```text
//!        chroma-color
//!             |
//!   +---------+---------+
//!   |         |         |
//! srgb     matrix      lab ---> planes
//!                                 |
//!                            chroma-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_color::{rgb_to_lab, lab_to_rgb, Lab};
//!
//! let lab = rgb_to_lab([0.5, 0.3, 0.2]);
//! let neutral = Lab::new(lab.l, 0.0, 0.0);
//! let gray = lab_to_rgb(neutral);
//! assert!((gray[0] - gray[1]).abs() < 1e-2);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Convert planes with rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lab;
pub mod matrix;
pub mod planes;
pub mod srgb;

pub use lab::{
    lab_to_rgb, rgb_to_ab, rgb_to_lab, rgb_u8_to_unit, rgb_unit_to_u8, unit_to_u8, u8_to_unit,
    Chroma, Lab,
};
pub use planes::{ChromaPlanes, LabPlanes};
