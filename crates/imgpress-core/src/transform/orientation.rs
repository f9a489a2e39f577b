//! Orientation correction applied after scaling.
//!
//! The scaled buffer is rotated by a multiple of 90 degrees so the output
//! displays upright without relying on metadata. Only the three pure
//! rotation tags are handled; mirrored and unknown tags are identity.

use image::imageops;

use crate::decode::{DecodedImage, Orientation};
use crate::error::{Error, Result};

/// Rotation in degrees for a raw EXIF orientation tag.
///
/// Pure table, exposed to the host: tag 6 → 90, tag 3 → 180, tag 8 → −90,
/// anything else → 0.
pub fn rotation_degrees(tag: u32) -> i32 {
    Orientation::from_tag(tag).degrees()
}

/// Rotate a buffer according to its source orientation tag.
///
/// ±90° rotations swap the buffer's width and height; 180° preserves them;
/// `Normal` hands the input back untouched. Applied exactly once per
/// invocation, using the tag read before any resampling.
pub fn correct(image: DecodedImage, orientation: Orientation) -> Result<DecodedImage> {
    if orientation == Orientation::Normal {
        return Ok(image);
    }

    let rgb = image
        .into_rgb_image()
        .ok_or_else(|| Error::Fatal("pixel buffer size mismatch before rotation".to_string()))?;

    let rotated = match orientation {
        Orientation::Rotate90 => imageops::rotate90(&rgb),
        Orientation::Rotate180 => imageops::rotate180(&rgb),
        Orientation::Rotate270 => imageops::rotate270(&rgb),
        Orientation::Normal => unreachable!(),
    };

    Ok(DecodedImage::from_rgb_image(rotated))
}
