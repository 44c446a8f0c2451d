#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use resample_image as image;

#[doc(inline)]
pub use resample_imgproc as imgproc;

#[doc(inline)]
pub use resample_viz as viz;
