//! Filtered resampling to exact target dimensions.

use crate::decode::DecodedImage;
use crate::error::{Error, Result};

/// Resample an image to exactly `width × height` with a bilinear filter.
///
/// The resampling grid maps destination pixel centers onto source pixel
/// centers, so the source is scaled anisotropically about its center
/// (the legacy canvas-centered behavior, not top-left-anchored scaling).
/// When the dimensions already match this is a no-op that returns the
/// input buffer unchanged.
///
/// # Errors
///
/// [`Error::InvalidImage`] for zero target dimensions, [`Error::OutOfMemory`]
/// when the destination buffer cannot possibly be allocated.
pub fn scale(image: DecodedImage, width: u32, height: u32) -> Result<DecodedImage> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidImage(format!(
            "zero target dimensions: {width}x{height}"
        )));
    }

    if image.width == width && image.height == height {
        return Ok(image);
    }

    let byte_size = width as u64 * height as u64 * 3;
    if byte_size > isize::MAX as u64 {
        return Err(Error::OutOfMemory);
    }

    let rgb = image
        .into_rgb_image()
        .ok_or_else(|| Error::Fatal("pixel buffer size mismatch before scale".to_string()))?;
    let resized =
        image::imageops::resize(&rgb, width, height, image::imageops::FilterType::Triangle);
    Ok(DecodedImage::from_rgb_image(resized))
}
