//! Image decoding: header probe, EXIF orientation, pixel decode.
//!
//! The decoder works in two passes the way the legacy implementation did:
//! a cheap header-only probe for true dimensions plus the orientation tag,
//! then a full pixel decode honoring the coarse sample factor computed by
//! the bounds calculator. The probe allocates nothing pixel-sized, so the
//! pipeline can size its buffers before committing memory.

mod jpeg;
mod types;

pub use jpeg::{decode, probe};
pub use types::{DecodedImage, ImageInfo, Orientation};
