#![deny(missing_docs)]
//! Grayscale raster types for resampling

/// raster representation for resampling purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Serialization support, available when the `serde` feature is enabled.
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
