//! JPEG output: in-memory encoding and atomic file writes.

mod jpeg;

pub use jpeg::{encode_jpeg, write_jpeg};
