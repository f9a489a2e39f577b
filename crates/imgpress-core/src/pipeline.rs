//! The resize pipeline: bounds → decode → scale → orient → encode.
//!
//! A single invocation is synchronous and strictly sequential. Every buffer
//! is owned by exactly one stage at a time and nothing outlives the call.
//! Concurrent invocations are independent end-to-end; there is no global
//! or static state anywhere in the pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::bounds;
use crate::decode::{self, DecodedImage, ImageInfo};
use crate::encode;
use crate::error::Result;
use crate::options::Options;
use crate::transform;

/// A source image handed to the pipeline: raw bytes plus header facts read
/// on demand. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ImageSource {
    bytes: Vec<u8>,
}

impl ImageSource {
    /// Read a source image from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self {
            bytes: fs::read(path)?,
        })
    }

    /// Wrap an in-memory source image.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Header-level dimensions and orientation, without decoding pixels.
    pub fn probe(&self) -> Result<ImageInfo> {
        decode::probe(&self.bytes)
    }

    /// The raw source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Result of an in-memory resize: encoded JPEG plus final dimensions.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// JPEG-encoded output bytes.
    pub bytes: Vec<u8>,
    /// Output width after orientation correction.
    pub width: u32,
    /// Output height after orientation correction.
    pub height: u32,
}

/// Run the stages up to and including orientation correction.
///
/// The orientation tag is read from the source header before any
/// resampling and applied exactly once, after scaling.
fn transform_source(source: &ImageSource, options: &Options) -> Result<DecodedImage> {
    let info = source.probe()?;
    let target = bounds::compute_target(
        info.width,
        info.height,
        options.effective_max_width(),
        options.effective_max_height(),
    )?;
    debug!(
        source_width = info.width,
        source_height = info.height,
        target_width = target.width,
        target_height = target.height,
        sample_size = target.sample_size,
        orientation = ?info.orientation,
        "computed resize target"
    );

    let decoded = decode::decode(source.as_bytes(), target.sample_size)?;
    let scaled = transform::scale(decoded, target.width, target.height)?;
    transform::correct(scaled, info.orientation)
}

/// Run the full pipeline in memory and return the encoded JPEG.
///
/// # Errors
///
/// Any stage failure aborts the invocation with its typed error; nothing
/// partial is returned. [`crate::Error::OutOfMemory`] may be retried by the
/// caller with smaller bounds.
pub fn resize_to_bytes(source: &ImageSource, options: &Options) -> Result<EncodedImage> {
    let oriented = transform_source(source, options)?;

    let (width, height) = (oriented.width, oriented.height);
    let bytes = encode::encode_jpeg(&oriented, options.quality())?;
    debug!(width, height, bytes = bytes.len(), "encoded output");

    Ok(EncodedImage {
        bytes,
        width,
        height,
    })
}

/// Resize a source file into `output_dir` and return the output path.
///
/// The output is named `<uuid>.jpg` so concurrent invocations never
/// collide, and is written atomically: the file appears at its final path
/// only after the encode has fully succeeded.
///
/// # Errors
///
/// Same taxonomy as [`resize_to_bytes`], plus [`crate::Error::Io`] for
/// source read or destination write failures.
pub fn resize_image(source_path: &Path, output_dir: &Path, options: &Options) -> Result<PathBuf> {
    let source = ImageSource::from_path(source_path)?;
    let oriented = transform_source(&source, options)?;

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{}.jpg", Uuid::new_v4()));
    encode::write_jpeg(&oriented, options.quality(), &output_path)?;
    debug!(output = %output_path.display(), "wrote resized image");

    Ok(output_path)
}
