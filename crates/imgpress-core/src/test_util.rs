//! Shared fixtures for unit tests: synthetic images and EXIF splicing.

use crate::decode::DecodedImage;

/// A gradient image, useful when resampling output should vary per pixel.
pub fn gradient_image(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x * 255) / width.max(1)) as u8);
            pixels.push(((y * 255) / height.max(1)) as u8);
            pixels.push(128);
        }
    }
    DecodedImage::new(width, height, pixels)
}

/// A single-color image.
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> DecodedImage {
    let pixels = rgb
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 3)
        .collect();
    DecodedImage::new(width, height, pixels)
}

/// JPEG bytes for a gradient image of the given size.
pub fn jpeg_bytes(width: u32, height: u32, quality: u8) -> Vec<u8> {
    crate::encode::encode_jpeg(&gradient_image(width, height), quality).unwrap()
}

/// JPEG bytes for a single-color image.
pub fn solid_jpeg_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    crate::encode::encode_jpeg(&solid_image(width, height, rgb), 95).unwrap()
}

/// Splice a minimal EXIF APP1 segment carrying an orientation tag into a
/// JPEG, right after the SOI marker.
pub fn with_exif_orientation(jpeg: &[u8], tag: u16) -> Vec<u8> {
    assert_eq!(&jpeg[..2], [0xFF, 0xD8], "not a JPEG");

    // Little-endian TIFF with a single IFD0 entry: Orientation (0x0112),
    // type SHORT, count 1, value stored inline.
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II*\0");
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x0112u16.to_le_bytes());
    tiff.extend_from_slice(&3u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&tag.to_le_bytes());
    tiff.extend_from_slice(&[0, 0]);
    tiff.extend_from_slice(&0u32.to_le_bytes());

    let mut app1 = vec![0xFF, 0xE1];
    app1.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(&tiff);

    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}
