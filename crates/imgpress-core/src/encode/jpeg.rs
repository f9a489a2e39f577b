//! JPEG encoding with atomic file output.
//!
//! Encoding goes through the `image` crate's JPEG encoder at a 1–100
//! quality level. File output streams through a buffered writer into a
//! temporary sibling path that is renamed over the destination only after a
//! successful flush, so a failed encode never leaves a truncated file where
//! consumers look.

use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::decode::DecodedImage;
use crate::error::{Error, Result};

/// Encode an image to in-memory JPEG bytes.
///
/// `quality` is clamped to 1–100.
///
/// # Errors
///
/// [`Error::Encode`] on codec failure, [`Error::Fatal`] if the buffer does
/// not match its declared dimensions.
pub fn encode_jpeg(image: &DecodedImage, quality: u8) -> Result<Vec<u8>> {
    validate(image)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(Error::from_encode)?;

    Ok(buffer.into_inner())
}

/// Encode an image as JPEG directly to `path`, atomically.
///
/// The stream is written to `<path>.tmp` through a buffered writer and
/// renamed into place after the flush succeeds. On any failure the
/// temporary file is removed and nothing appears at `path`.
///
/// # Errors
///
/// [`Error::Encode`] on codec failure, [`Error::Io`] on filesystem failure.
pub fn write_jpeg(image: &DecodedImage, quality: u8, path: &Path) -> Result<()> {
    validate(image)?;

    let tmp = tmp_path(path);
    let result = stream_to(image, quality, &tmp)
        .and_then(|()| fs::rename(&tmp, path).map_err(Error::from));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn stream_to(image: &DecodedImage, quality: u8, tmp: &Path) -> Result<()> {
    let file = File::create(tmp)?;
    let mut writer = BufWriter::new(file);

    let encoder = JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100));
    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(Error::from_encode)?;

    writer.flush()?;
    Ok(())
}

fn tmp_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn validate(image: &DecodedImage) -> Result<()> {
    if image.width == 0 || image.height == 0 {
        return Err(Error::InvalidImage(format!(
            "zero dimensions: {}x{}",
            image.width, image.height
        )));
    }
    let expected = image.width as usize * image.height as usize * 3;
    if image.pixels.len() != expected {
        return Err(Error::Fatal(format!(
            "pixel buffer size mismatch: expected {expected} bytes, got {}",
            image.pixels.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{gradient_image, solid_image};

    #[test]
    fn test_encode_produces_jpeg_markers() {
        let jpeg = encode_jpeg(&solid_image(100, 100, [128, 128, 128]), 90).unwrap();

        // SOI at the start, EOI at the end
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_quality_affects_size() {
        let img = gradient_image(100, 100);

        let low = encode_jpeg(&img, 20).unwrap();
        let high = encode_jpeg(&img, 95).unwrap();
        assert!(high.len() > low.len());
    }

    #[test]
    fn test_encode_quality_clamped() {
        let img = solid_image(10, 10, [0, 0, 0]);
        assert!(encode_jpeg(&img, 0).is_ok());
        assert!(encode_jpeg(&img, 255).is_ok());
    }

    #[test]
    fn test_encode_one_pixel() {
        let jpeg = encode_jpeg(&solid_image(1, 1, [255, 0, 0]), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_zero_dimensions_rejected() {
        let img = DecodedImage {
            width: 0,
            height: 100,
            pixels: vec![],
        };
        assert!(matches!(
            encode_jpeg(&img, 90),
            Err(Error::InvalidImage(_))
        ));
    }

    #[test]
    fn test_encode_buffer_mismatch_is_fatal() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 10],
        };
        assert!(matches!(encode_jpeg(&img, 90), Err(Error::Fatal(_))));
    }

    #[test]
    fn test_write_jpeg_creates_file_and_cleans_tmp() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.jpg");

        write_jpeg(&gradient_image(32, 32), 80, &path).unwrap();

        assert!(path.exists());
        assert!(!tmp_path(&path).exists());

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_write_jpeg_missing_directory_leaves_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.jpg");

        let result = write_jpeg(&gradient_image(8, 8), 80, &path);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_jpeg_overwrites_existing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.jpg");

        write_jpeg(&solid_image(8, 8, [255, 0, 0]), 80, &path).unwrap();
        let first = fs::read(&path).unwrap();

        write_jpeg(&gradient_image(16, 16), 80, &path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_ne!(first, second);
    }
}
