//! Target dimension and decode sample-size calculation.
//!
//! Pure math, no I/O. Everything downstream of this module trusts the
//! invariants established here: targets never exceed the bounds, never hit
//! zero, and the sample size never shrinks the source below the target.

use crate::error::{Error, Result};

/// Computed bounds for one resize invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Power-of-two factor by which the decoder may coarsely reduce the
    /// source before filtered scaling.
    pub sample_size: u32,
}

/// Compute output dimensions and decode sample size for a source image.
///
/// An image already within both bounds is passed through unchanged (no
/// upscaling). Otherwise the image is fit against whichever bound its aspect
/// ratio hits first, with the free dimension rounded from the real-valued
/// scale factor.
///
/// When the image ratio equals the bounds ratio exactly, the target is
/// `(max_width, max_height)` verbatim. This aspect-locked fit can deviate
/// from the computed ratio by integer rounding and is preserved for
/// compatibility with the legacy implementation.
///
/// # Errors
///
/// Returns [`Error::InvalidImage`] when either source dimension is zero.
pub fn compute_target(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<Target> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidImage(format!(
            "zero source dimensions: {width}x{height}"
        )));
    }
    debug_assert!(max_width > 0 && max_height > 0, "bounds must be positive");

    if height <= max_height && width <= max_width {
        return Ok(Target {
            width,
            height,
            sample_size: 1,
        });
    }

    let img_ratio = width as f64 / height as f64;
    let max_ratio = max_width as f64 / max_height as f64;

    let (target_width, target_height) = if img_ratio < max_ratio {
        // Height-bound: the image is taller than the bounds box.
        let scale = max_height as f64 / height as f64;
        let w = (scale * width as f64).round() as u32;
        (w.max(1), max_height)
    } else if img_ratio > max_ratio {
        // Width-bound: the image is wider than the bounds box.
        let scale = max_width as f64 / width as f64;
        let h = (scale * height as f64).round() as u32;
        (max_width, h.max(1))
    } else {
        // Legacy aspect-locked fit: both bounds taken exactly.
        (max_width, max_height)
    };

    Ok(Target {
        width: target_width,
        height: target_height,
        sample_size: sample_size(width, height, target_width, target_height),
    })
}

/// Largest power of two by which both source dimensions can be divided while
/// still meeting or exceeding the target dimensions.
///
/// Starts at 1 and doubles while both halved dimensions stay at or above the
/// target, so decoding at `1/sample_size` resolution never undershoots what
/// the filtered scaler must produce.
fn sample_size(width: u32, height: u32, target_width: u32, target_height: u32) -> u32 {
    let (width, height) = (width as u64, height as u64);
    let (target_width, target_height) = (target_width as u64, target_height as u64);

    let mut sample = 1u64;
    while height / (sample * 2) >= target_height && width / (sample * 2) >= target_width {
        sample *= 2;
    }
    sample as u32
}
