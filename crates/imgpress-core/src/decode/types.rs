//! Core types for image decoding.

use serde::{Deserialize, Serialize};

/// EXIF orientation subset handled by the pipeline.
///
/// Only the three pure rotations are corrected. Mirrored variants and
/// unknown or absent tags pass through untouched, matching the legacy
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// No rotation needed.
    #[default]
    Normal,
    /// Rotate 90 degrees clockwise (EXIF tag 6).
    Rotate90,
    /// Rotate 180 degrees (EXIF tag 3).
    Rotate180,
    /// Rotate 270 degrees clockwise, i.e. 90 counter-clockwise (EXIF tag 8).
    Rotate270,
}

impl Orientation {
    /// Map a raw EXIF orientation tag to the handled subset.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            6 => Orientation::Rotate90,
            3 => Orientation::Rotate180,
            8 => Orientation::Rotate270,
            _ => Orientation::Normal,
        }
    }

    /// Rotation in degrees applied for this orientation.
    ///
    /// Positive is clockwise; tag 8 comes back as −90, matching the legacy
    /// host contract.
    pub fn degrees(self) -> i32 {
        match self {
            Orientation::Normal => 0,
            Orientation::Rotate90 => 90,
            Orientation::Rotate180 => 180,
            Orientation::Rotate270 => -90,
        }
    }

    /// Returns true if correcting this orientation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Orientation::Rotate90 | Orientation::Rotate270)
    }
}

impl From<u32> for Orientation {
    fn from(tag: u32) -> Self {
        Orientation::from_tag(tag)
    }
}

/// Header-level facts about a source image, read before any pixel decode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Width in pixels as stored (before orientation correction).
    pub width: u32,
    /// Height in pixels as stored (before orientation correction).
    pub height: u32,
    /// EXIF orientation, `Normal` when absent or unreadable.
    pub orientation: Orientation,
}

/// A decoded image with RGB pixel data.
///
/// Each pipeline stage owns its buffer exclusively: stages consume their
/// input and hand back a new (or the same, for no-op paths) owned value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order, 3 bytes per pixel.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a DecodedImage from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert into an `image::RgbImage`, consuming the buffer.
    ///
    /// Returns `None` only if the buffer length does not match the declared
    /// dimensions.
    pub fn into_rgb_image(self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels)
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
