//! Header probe and pixel decode with EXIF orientation extraction.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::{DecodedImage, ImageInfo, Orientation};
use crate::error::{Error, Result};

/// Read dimensions and EXIF orientation without decoding any pixel data.
///
/// # Errors
///
/// Returns [`Error::InvalidImage`] if the header is unreadable or reports
/// zero dimensions. Orientation metadata problems are not errors.
pub fn probe(bytes: &[u8]) -> Result<ImageInfo> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| Error::InvalidImage(e.to_string()))?;

    if width == 0 || height == 0 {
        return Err(Error::InvalidImage(format!(
            "zero dimensions in header: {width}x{height}"
        )));
    }

    Ok(ImageInfo {
        width,
        height,
        orientation: read_orientation(bytes),
    })
}

/// Decode pixel data, coarsely reducing by `sample_size` when the bounds
/// calculator determined the full resolution cannot be used.
///
/// The pure-Rust decoders take no downsampling hint, so the reduction runs
/// immediately after decode with a nearest filter and the filtered scaler
/// performs the final resampling. The reduced dimensions never drop below
/// the computed target (bounds invariant).
///
/// # Errors
///
/// [`Error::InvalidImage`] for unrecognized formats, [`Error::Decode`] for
/// corrupt pixel data, [`Error::OutOfMemory`] when the decoder refuses the
/// allocation.
pub fn decode(bytes: &[u8], sample_size: u32) -> Result<DecodedImage> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let img = reader.decode().map_err(Error::from_decode)?;
    let decoded = DecodedImage::from_rgb_image(img.into_rgb8());

    if sample_size <= 1 {
        return Ok(decoded);
    }

    let width = (decoded.width / sample_size).max(1);
    let height = (decoded.height / sample_size).max(1);
    tracing::trace!(sample_size, width, height, "coarse-reducing decoded image");

    let rgb = decoded
        .into_rgb_image()
        .ok_or_else(|| Error::Fatal("pixel buffer size mismatch after decode".to_string()))?;
    let reduced =
        image::imageops::resize(&rgb, width, height, image::imageops::FilterType::Nearest);
    Ok(DecodedImage::from_rgb_image(reduced))
}

/// Extract the EXIF orientation tag.
///
/// Metadata read failure is never an error: the image is still usable
/// without rotation correction, so anything unreadable degrades to
/// `Orientation::Normal`.
fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from_tag)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}
