use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use resample_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Returns true if both dimensions are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for image data types.
///
/// Send and Sync is required to fill rows from the rayon thread pool.
pub trait ImageDtype: Copy + Default + Into<f32> + Send + Sync {
    /// Convert a f32 value to the image data type.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl ImageDtype for u8 {
    /// Rounds half to even and saturates to the `[0, 255]` range.
    fn from_f32(x: f32) -> Self {
        x.round_ties_even().clamp(0.0, 255.0) as u8
    }
}

/// Represents a single channel raster with pixel data.
///
/// The pixels are stored row-major with shape (H, W) and indexed as `[row, col]`.
/// Both dimensions are always strictly positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image in row-major order.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If a dimension is zero or the length of the pixel data does not match the image size,
    /// an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if !size.is_valid() {
            return Err(ImageError::InvalidDimension(size.height, size.width));
        }

        // check if the data length matches the image size
        if data.len() != size.area() {
            return Err(ImageError::InvalidChannelShape(data.len(), size.area()));
        }

        Ok(Self { size, data })
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the pixel data of the image as a row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data of the image as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to the pixel at `[row, col]`, or `None` if out of bounds.
    pub fn get(&self, index: [usize; 2]) -> Option<&T> {
        let [row, col] = index;
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.data.get(row * self.cols() + col)
    }

    /// Get a row of the image, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows() {
            return None;
        }
        let start = row * self.cols();
        self.data.get(start..start + self.cols())
    }

    /// Iterate over the rows of the image from top to bottom.
    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.cols())
    }
}

impl<T: Clone> Image<T> {
    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Errors
    ///
    /// If a dimension is zero, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError> {
        let data = vec![val; size.area()];
        Image::new(size, data)
    }

    /// Create a new image from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimension`] when there are no rows or the rows are empty
    /// and [`ImageError::NonRectangularRows`] when the rows differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_image::Image;
    ///
    /// let image = Image::from_rows(&[[10u8, 200], [200, 10]]).unwrap();
    ///
    /// assert_eq!(image.get([0, 1]), Some(&200));
    /// assert_eq!(image.rows(), 2);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, ImageError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());

        if height == 0 || width == 0 {
            return Err(ImageError::InvalidDimension(height, width));
        }

        let mut data = Vec::with_capacity(width * height);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ImageError::NonRectangularRows(i, row.len(), width));
            }
            data.extend_from_slice(row);
        }

        Image::new(ImageSize { width, height }, data)
    }
}

impl<T: Copy> Image<T> {
    /// Cast the pixel data of the image to a different type.
    ///
    /// # Returns
    ///
    /// A new image with the pixel data cast to the given type.
    ///
    /// # Errors
    ///
    /// If a pixel value cannot be represented in the target type, an error is returned.
    pub fn cast<U>(&self) -> Result<Image<U>, ImageError>
    where
        U: num_traits::NumCast,
        T: num_traits::NumCast,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }

    /// Get the minimum and maximum pixel values of the image.
    pub fn min_max(&self) -> (T, T)
    where
        T: PartialOrd,
    {
        let first = self.data[0];
        self.data.iter().fold((first, first), |(lo, hi), &v| {
            (
                if v < lo { v } else { lo },
                if v > hi { v } else { hi },
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageDtype, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.area(), 200);
        assert_eq!(image_size.to_string(), "20x10");
        assert_eq!(ImageSize::from([3, 4]), ImageSize { width: 3, height: 4 });
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.rows(), 20);
        assert_eq!(image.cols(), 10);

        Ok(())
    }

    #[test]
    fn image_invalid_length() {
        let res = Image::<u8>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 3],
        );
        assert_eq!(res, Err(ImageError::InvalidChannelShape(3, 4)));
    }

    #[test]
    fn image_zero_dimension() {
        let res = Image::<u8>::new(
            ImageSize {
                width: 0,
                height: 2,
            },
            vec![],
        );
        assert_eq!(res, Err(ImageError::InvalidDimension(2, 0)));

        let res = Image::<u8>::from_size_val(
            ImageSize {
                width: 3,
                height: 0,
            },
            0,
        );
        assert_eq!(res, Err(ImageError::InvalidDimension(0, 3)));
    }

    #[test]
    fn image_from_rows() -> Result<(), ImageError> {
        let image = Image::from_rows(&[vec![1u8, 2, 3], vec![4, 5, 6]])?;
        assert_eq!(image.size(), ImageSize { width: 3, height: 2 });
        assert_eq!(image.get([1, 0]), Some(&4));
        assert_eq!(image.get([2, 0]), None);
        assert_eq!(image.get([0, 3]), None);
        assert_eq!(image.row(1), Some(&[4u8, 5, 6][..]));
        assert_eq!(image.row(2), None);
        assert_eq!(image.iter_rows().count(), 2);

        let ragged = Image::from_rows(&[vec![1u8, 2, 3], vec![4, 5]]);
        assert_eq!(ragged, Err(ImageError::NonRectangularRows(1, 2, 3)));

        let empty: Result<Image<u8>, _> = Image::from_rows::<Vec<u8>>(&[]);
        assert_eq!(empty, Err(ImageError::InvalidDimension(0, 0)));

        Ok(())
    }

    #[test]
    fn image_cast() -> Result<(), ImageError> {
        let image_u8 = Image::from_rows(&[[0u8, 1, 2], [3, 4, 5]])?;
        let image_f32: Image<f32> = image_u8.cast()?;
        assert_eq!(image_f32.get([1, 2]), Some(&5.0f32));

        let image_f32 = Image::from_rows(&[[-1.0f32, 300.0]])?;
        assert_eq!(image_f32.cast::<u8>(), Err(ImageError::CastError));

        Ok(())
    }

    #[test]
    fn image_min_max() -> Result<(), ImageError> {
        let image = Image::from_rows(&[[10u8, 250, 100], [200, 10, 9]])?;
        assert_eq!(image.min_max(), (9, 250));
        Ok(())
    }

    #[test]
    fn dtype_from_f32_u8() {
        assert_eq!(u8::from_f32(12.4), 12);
        assert_eq!(u8::from_f32(12.5), 12);
        assert_eq!(u8::from_f32(13.5), 14);
        assert_eq!(u8::from_f32(-0.3), 0);
        assert_eq!(u8::from_f32(255.49), 255);
        assert_eq!(u8::from_f32(300.0), 255);
    }
}
