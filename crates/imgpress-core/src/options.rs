//! Caller-supplied resize options and their named defaults.
//!
//! The host passes options as a loosely-typed map; `Options` is its typed
//! shape on this side of the boundary. Zero bounds select the built-in
//! portrait-screen defaults, and the compression quality arrives as a
//! fraction in `[0, 1]` that is converted to an integer percentage here.

use serde::{Deserialize, Serialize};

/// Default bound for the narrower (width) edge, in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 612;

/// Default bound for the taller (height) edge, in pixels.
pub const DEFAULT_MAX_HEIGHT: u32 = 816;

/// Default JPEG quality percentage used when no fraction is supplied.
pub const DEFAULT_QUALITY: u8 = 80;

/// Options for a single resize invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Maximum output width in pixels. Zero means [`DEFAULT_MAX_WIDTH`].
    pub max_width: u32,
    /// Maximum output height in pixels. Zero means [`DEFAULT_MAX_HEIGHT`].
    pub max_height: u32,
    /// JPEG quality as a fraction in `[0, 1]`. `None` means
    /// [`DEFAULT_QUALITY`] / 100.
    pub compress_image_quality: Option<f64>,
}

impl Options {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective width bound, substituting the default for zero.
    pub fn effective_max_width(&self) -> u32 {
        if self.max_width == 0 {
            DEFAULT_MAX_WIDTH
        } else {
            self.max_width
        }
    }

    /// Effective height bound, substituting the default for zero.
    pub fn effective_max_height(&self) -> u32 {
        if self.max_height == 0 {
            DEFAULT_MAX_HEIGHT
        } else {
            self.max_height
        }
    }

    /// Effective JPEG quality percentage.
    ///
    /// The boundary fraction is clamped to `[0, 1]` and converted with
    /// `round(fraction * 100)`.
    pub fn quality(&self) -> u8 {
        match self.compress_image_quality {
            Some(fraction) => (fraction.clamp(0.0, 1.0) * 100.0).round() as u8,
            None => DEFAULT_QUALITY,
        }
    }
}
