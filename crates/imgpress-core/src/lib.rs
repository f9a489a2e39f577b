//! Imgpress Core - Bounded image resize and JPEG re-encode pipeline.
//!
//! Given a source image (file path or bytes), the pipeline decodes it,
//! computes a target size bounded by maximum dimensions, scales it with a
//! filtered kernel, corrects orientation from EXIF metadata, and re-encodes
//! it as JPEG at a caller-specified quality.
//!
//! # Pipeline
//!
//! Data flows strictly left to right, each stage owning its buffer:
//!
//! ```text
//! bounds → decode → scale → orient → encode
//! ```
//!
//! - [`bounds`] computes target dimensions and a power-of-two decode sample
//!   factor that caps peak memory.
//! - [`decode`] probes the header (dimensions, orientation tag), then
//!   decodes pixels at a coarsely reduced resolution.
//! - [`transform`] resamples to the exact target and applies the rotation
//!   the orientation tag asks for.
//! - [`encode`] produces the JPEG stream, atomically when writing files.
//!
//! # Entry points
//!
//! [`resize_image`] is the file-to-file surface the host calls;
//! [`resize_to_bytes`] is the same pipeline for in-memory consumers.
//! [`compress_video`] is a documented pass-through stub.
//!
//! A single invocation is synchronous and single-threaded. Invocations
//! share no state, so callers may run any number of them concurrently.

pub mod bounds;
pub mod decode;
pub mod encode;
mod error;
pub mod options;
pub mod pipeline;
pub mod transform;
pub mod video;

#[cfg(test)]
pub(crate) mod test_util;

pub use bounds::{compute_target, Target};
pub use decode::{DecodedImage, ImageInfo, Orientation};
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY};
pub use pipeline::{resize_image, resize_to_bytes, EncodedImage, ImageSource};
pub use transform::rotation_degrees;
pub use video::compress_video;
