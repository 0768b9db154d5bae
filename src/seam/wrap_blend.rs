//! Wrap-pad blend: fade the bottom and right borders into the top and left

use crate::io::error::{Result, invalid_dimension, zero_dimension};
use crate::raster::bitmap::{Bitmap, ColorMode};
use crate::raster::geometry::{crop, wrap_pad};
use crate::seam::blend::blend_border_lane;
use ndarray::Axis;
use tracing::debug;

/// Exclusive upper bound for the border of a `height x width` bitmap
pub fn border_limit(height: usize, width: usize) -> usize {
    height.min(width)
}

/// Check that `border` is positive and below both image dimensions
///
/// # Errors
///
/// Returns [`crate::TileError::InvalidDimension`] when the border is zero or
/// not smaller than `min(height, width)`
pub fn validate_border(border: usize, height: usize, width: usize) -> Result<()> {
    let limit = border_limit(height, width);
    if border == 0 {
        return Err(zero_dimension("border", &"border width must be positive"));
    }
    if border >= limit {
        return Err(invalid_dimension(
            "border",
            border,
            limit,
            &format!("border must be smaller than the {height}x{width} image"),
        ));
    }
    Ok(())
}

/// Blend the last `border` rows and columns toward the first ones
///
/// The image is wrap-padded by `border` below and to the right. For each
/// step `i`, row `h - border + i` and then column `w - border + i` are mixed
/// with weight `i / border` toward the wrapped copy of row or column `i`.
/// The padding is cropped away afterwards, leaving an RGB image of the
/// input size whose bottom and right bands fade into its top and left.
///
/// # Errors
///
/// Returns an error if the border fails [`validate_border`]
pub fn wrap_blend(bitmap: &Bitmap, border: usize) -> Result<Bitmap> {
    let (height, width, _) = bitmap.dim();
    validate_border(border, height, width)?;
    debug!(height, width, border, "Blending wrap-padded borders");

    let rgb = bitmap.to_rgb();
    let mut padded = wrap_pad(&rgb.view(), border, border);
    for step in 0..border {
        blend_border_lane(&mut padded, Axis(0), height, border, step);
        blend_border_lane(&mut padded, Axis(1), width, border, step);
    }

    let blended = crop(&padded.view(), 0, 0, height, width);
    Ok(Bitmap::from_parts(blended, ColorMode::Rgb))
}
