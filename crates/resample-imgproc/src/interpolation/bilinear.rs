use resample_image::{Image, ImageDtype};

/// Kernel for bilinear interpolation
///
/// The coordinate is clamped to the image extent first, so the border samples are
/// replicated for coordinates that fall outside the grid. At the last row or column
/// the second neighbor collapses onto the first one.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `x` - The row coordinate of the pixel to interpolate.
/// * `y` - The column coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel value, not rounded.
pub(crate) fn bilinear_interpolation<T: ImageDtype>(image: &Image<T>, x: f32, y: f32) -> f32 {
    let (rows, cols) = (image.rows(), image.cols());

    let x = x.clamp(0.0, (rows - 1) as f32);
    let y = y.clamp(0.0, (cols - 1) as f32);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;

    let dx = x - x0 as f32;
    let dy = y - y0 as f32;

    let x1 = (x0 + 1).min(rows - 1);
    let y1 = (y0 + 1).min(cols - 1);

    let data = image.as_slice();
    let q00: f32 = data[x0 * cols + y0].into();
    let q10: f32 = data[x1 * cols + y0].into();
    let q01: f32 = data[x0 * cols + y1].into();
    let q11: f32 = data[x1 * cols + y1].into();

    // blend along the rows first, then along the columns
    let r0 = q00 * (1.0 - dx) + q10 * dx;
    let r1 = q01 * (1.0 - dx) + q11 * dx;

    r0 * (1.0 - dy) + r1 * dy
}
