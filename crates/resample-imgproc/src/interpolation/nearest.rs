use resample_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `x` - The row coordinate of the pixel to interpolate.
/// * `y` - The column coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The source pixel closest to `(x, y)`, copied verbatim.
pub(crate) fn nearest_neighbor_interpolation<T: Copy>(image: &Image<T>, x: f32, y: f32) -> T {
    let (rows, cols) = (image.rows(), image.cols());

    // ties go to the even index; negative coordinates saturate to zero on the cast
    let ix = (x.round_ties_even() as usize).min(rows - 1);
    let iy = (y.round_ties_even() as usize).min(cols - 1);

    image.as_slice()[ix * cols + iy]
}
