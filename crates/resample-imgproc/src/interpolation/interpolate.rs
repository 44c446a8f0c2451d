use std::fmt;
use std::str::FromStr;

use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use resample_image::{Image, ImageDtype};

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationMode::Bilinear => write!(f, "bilinear"),
            InterpolationMode::Nearest => write!(f, "nearest"),
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bilinear" => Ok(InterpolationMode::Bilinear),
            "nearest" => Ok(InterpolationMode::Nearest),
            other => Err(format!(
                "unknown interpolation mode '{other}', expected 'nearest' or 'bilinear'"
            )),
        }
    }
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width).
/// * `x` - The row coordinate of the pixel to interpolate.
/// * `y` - The column coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel value. Bilinear results are rounded and saturated by
/// [`ImageDtype::from_f32`], nearest results are exact source samples.
///
/// # Example
///
/// ```
/// use resample_image::Image;
/// use resample_imgproc::interpolation::{interpolate_pixel, InterpolationMode};
///
/// let image = Image::from_rows(&[[0u8, 10], [20, 30]]).unwrap();
///
/// assert_eq!(interpolate_pixel(&image, 0.5, 0.5, InterpolationMode::Bilinear), 15);
/// assert_eq!(interpolate_pixel(&image, 0.4, 0.6, InterpolationMode::Nearest), 10);
/// ```
pub fn interpolate_pixel<T: ImageDtype>(
    image: &Image<T>,
    x: f32,
    y: f32,
    interpolation: InterpolationMode,
) -> T {
    match interpolation {
        InterpolationMode::Bilinear => T::from_f32(bilinear_interpolation(image, x, y)),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::{interpolate_pixel, InterpolationMode};
    use resample_image::{Image, ImageError};

    #[test]
    fn interpolate_dispatch() -> Result<(), ImageError> {
        let image = Image::from_rows(&[[0u8, 255], [255, 255]])?;

        // 0.75 * 255 = 191.25
        assert_eq!(
            interpolate_pixel(&image, 0.5, 0.5, InterpolationMode::Bilinear),
            191
        );
        assert_eq!(
            interpolate_pixel(&image, 0.4, 0.4, InterpolationMode::Nearest),
            0
        );

        let image = image.cast::<f32>()?;
        assert_eq!(
            interpolate_pixel(&image, 0.5, 0.5, InterpolationMode::Bilinear),
            191.25
        );

        Ok(())
    }

    #[test]
    fn mode_from_str() {
        assert_eq!(
            "nearest".parse::<InterpolationMode>(),
            Ok(InterpolationMode::Nearest)
        );
        assert_eq!(
            "BILINEAR".parse::<InterpolationMode>(),
            Ok(InterpolationMode::Bilinear)
        );
        assert!("bicubic".parse::<InterpolationMode>().is_err());
        assert_eq!(InterpolationMode::Nearest.to_string(), "nearest");
    }
}
