/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when an image or a target size has a zero dimension.
    #[error("Invalid image dimension ({0}x{1}), width and height must be > 0")]
    InvalidDimension(usize, usize),

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the rows used to build an image are not all the same length.
    #[error("Row {0} has length {1}, expected {2}")]
    NonRectangularRows(usize, usize, usize),

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast image data")]
    CastError,

    /// Error when the parallel executor could not run the operation.
    #[error("Parallel execution failed: {0}")]
    Parallel(String),
}
