//! Pixel interpolation methods for raster resampling.
//!
//! This module provides the interpolation kernels used when resampling a raster
//! to a different resolution, together with the coordinate mapping that decides
//! which source position each output pixel reads from.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, copies the closest source pixel (no blending)
//! - **Bilinear**: Weighted average of the four surrounding source pixels
//!
//! # Coordinate Mappings
//!
//! - **Endpoint**: output corners land on input corners
//! - **Center**: pixel centers scale proportionally

mod bilinear;

/// Coordinate mapping utilities.
///
/// Functions to convert output indices into source-space coordinates for each
/// supported [`CoordinateMapping`].
pub mod grid;

pub(crate) mod interpolate;
mod nearest;

pub use grid::{axis_coordinates, map_coordinate, CoordinateMapping};
pub use interpolate::{interpolate_pixel, InterpolationMode};
