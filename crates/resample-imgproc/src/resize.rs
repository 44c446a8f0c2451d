use crate::interpolation::{
    axis_coordinates, interpolate_pixel, CoordinateMapping, InterpolationMode,
};
use crate::parallel::{self, ExecutionStrategy};
use resample_image::{Image, ImageDtype, ImageError, ImageSize};

/// Options controlling a resize operation.
///
/// The default is bilinear interpolation with the endpoint-aligned mapping on the
/// global thread pool.
///
/// # Example
///
/// ```
/// use resample_imgproc::interpolation::{CoordinateMapping, InterpolationMode};
/// use resample_imgproc::parallel::ExecutionStrategy;
/// use resample_imgproc::resize::ResizeOptions;
///
/// let options = ResizeOptions::default()
///     .with_interpolation(InterpolationMode::Nearest)
///     .with_mapping(CoordinateMapping::Center)
///     .with_strategy(ExecutionStrategy::Serial);
///
/// assert_eq!(options.interpolation, InterpolationMode::Nearest);
/// assert_eq!(options.mapping, CoordinateMapping::Center);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ResizeOptions {
    /// The interpolation kernel.
    pub interpolation: InterpolationMode,
    /// The convention mapping output indices to source coordinates.
    pub mapping: CoordinateMapping,
    /// How the output rows are scheduled.
    pub strategy: ExecutionStrategy,
}

impl ResizeOptions {
    /// Set the interpolation kernel.
    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Set the coordinate mapping.
    pub fn with_mapping(mut self, mapping: CoordinateMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Resize an image into a preallocated destination.
///
/// The size of `dst` is the target size. Every pixel of `dst` is overwritten.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `options` - The interpolation, mapping and execution options.
///
/// # Errors
///
/// Returns [`ImageError::Parallel`] if the execution strategy cannot be honored.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize};
/// use resample_imgproc::resize::{resize_native, ResizeOptions};
///
/// let image = Image::<f32>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<f32>::from_size_val(new_size, 0.0).unwrap();
///
/// resize_native(&image, &mut image_resized, &ResizeOptions::default()).unwrap();
///
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_native<T: ImageDtype>(
    src: &Image<T>,
    dst: &mut Image<T>,
    options: &ResizeOptions,
) -> Result<(), ImageError> {
    log::debug!(
        "resize {} -> {} ({}, {} mapping, {:?})",
        src.size(),
        dst.size(),
        options.interpolation,
        options.mapping,
        options.strategy
    );

    // the mapping is separable: one coordinate table per axis
    let map_rows = axis_coordinates(src.rows(), dst.rows(), options.mapping);
    let map_cols = axis_coordinates(src.cols(), dst.cols(), options.mapping);

    let interpolation = options.interpolation;
    parallel::par_iter_rows_resample(
        dst.as_slice_mut(),
        &map_rows,
        &map_cols,
        options.strategy,
        |x, y, pixel| {
            *pixel = interpolate_pixel(src, x, y, interpolation);
        },
    )
    .map_err(|e| ImageError::Parallel(e.to_string()))
}

/// Resize an image to a new size.
///
/// Allocates a fresh output image that shares no storage with `src`.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `new_size` - The size of the output image.
/// * `options` - The interpolation, mapping and execution options.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimension`] if `new_size` has a zero dimension.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize};
/// use resample_imgproc::interpolation::InterpolationMode;
/// use resample_imgproc::resize::{resize, ResizeOptions};
///
/// let image = Image::from_rows(&[[0u8, 100, 200]]).unwrap();
/// let options = ResizeOptions::default().with_interpolation(InterpolationMode::Bilinear);
///
/// let resized = resize(&image, ImageSize { width: 5, height: 1 }, &options).unwrap();
///
/// assert_eq!(resized.as_slice(), &[0, 50, 100, 150, 200]);
/// ```
pub fn resize<T: ImageDtype>(
    src: &Image<T>,
    new_size: ImageSize,
    options: &ResizeOptions,
) -> Result<Image<T>, ImageError> {
    if !new_size.is_valid() {
        return Err(ImageError::InvalidDimension(new_size.height, new_size.width));
    }

    let mut dst = Image::from_size_val(new_size, T::default())?;
    resize_native(src, &mut dst, options)?;

    Ok(dst)
}

/// Resize a grayscale raster with nearest neighbor interpolation.
///
/// Uses the endpoint-aligned mapping. Every output sample is a copy of some source sample.
///
/// # Arguments
///
/// * `src` - The source raster.
/// * `new_height` - The number of output rows.
/// * `new_width` - The number of output columns.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimension`] if `new_height` or `new_width` is zero.
///
/// # Example
///
/// ```
/// use resample_image::Image;
/// use resample_imgproc::resize::nearest_resize;
///
/// let image = Image::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
/// let resized = nearest_resize(&image, 3, 3).unwrap();
///
/// // the 0.5 midpoints round half to even, towards index 0
/// assert_eq!(resized.as_slice(), &[1, 1, 2, 1, 1, 2, 3, 3, 4]);
/// ```
pub fn nearest_resize(
    src: &Image<u8>,
    new_height: usize,
    new_width: usize,
) -> Result<Image<u8>, ImageError> {
    let options = ResizeOptions::default().with_interpolation(InterpolationMode::Nearest);
    resize(
        src,
        ImageSize {
            width: new_width,
            height: new_height,
        },
        &options,
    )
}

/// Resize a grayscale raster with bilinear interpolation.
///
/// Uses the endpoint-aligned mapping, so the four corners of the output equal the
/// four corners of the source.
///
/// # Arguments
///
/// * `src` - The source raster.
/// * `new_height` - The number of output rows.
/// * `new_width` - The number of output columns.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimension`] if `new_height` or `new_width` is zero.
///
/// # Example
///
/// ```
/// use resample_image::Image;
/// use resample_imgproc::resize::bilinear_resize;
///
/// let image = Image::from_rows(&[[0u8, 10], [20, 30]]).unwrap();
/// let resized = bilinear_resize(&image, 3, 3).unwrap();
///
/// assert_eq!(resized.as_slice(), &[0, 5, 10, 10, 15, 20, 20, 25, 30]);
/// ```
pub fn bilinear_resize(
    src: &Image<u8>,
    new_height: usize,
    new_width: usize,
) -> Result<Image<u8>, ImageError> {
    let options = ResizeOptions::default().with_interpolation(InterpolationMode::Bilinear);
    resize(
        src,
        ImageSize {
            width: new_width,
            height: new_height,
        },
        &options,
    )
}
