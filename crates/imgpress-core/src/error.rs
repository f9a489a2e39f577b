//! Error taxonomy for the resize pipeline.

use thiserror::Error;

/// Errors surfaced by the resize pipeline.
///
/// Every failure aborts the pipeline at the stage that produced it and no
/// partial output is returned. `OutOfMemory` is the only variant a caller can
/// meaningfully retry, by asking for smaller bounds.
#[derive(Debug, Error)]
pub enum Error {
    /// The image header is unreadable or reports zero dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The pixel data is corrupt or incomplete.
    #[error("decode failed: {0}")]
    Decode(String),

    /// A pixel buffer could not be allocated at decode or scale time.
    #[error("out of memory while processing image")]
    OutOfMemory,

    /// The JPEG codec failed while producing the output stream.
    #[error("encode failed: {0}")]
    Encode(String),

    /// Filesystem failure on the source or destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected and unclassified failure. Wrapped and surfaced, never
    /// swallowed.
    #[error("unexpected failure: {0}")]
    Fatal(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify an `image` crate error raised while decoding pixel data.
    pub(crate) fn from_decode(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Limits(e) => {
                tracing::debug!(error = %e, "decode hit allocation limit");
                Error::OutOfMemory
            }
            image::ImageError::Unsupported(e) => Error::InvalidImage(e.to_string()),
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::Decode(other.to_string()),
        }
    }

    /// Classify an `image` crate error raised while encoding.
    pub(crate) fn from_encode(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::Encode(other.to_string()),
        }
    }
}
