//! Center roll with a linear seam blend

use crate::io::error::{Result, invalid_dimension, zero_dimension};
use crate::raster::bitmap::{Bitmap, ColorMode};
use crate::raster::geometry::roll;
use crate::seam::blend::cascade_seam;
use ndarray::Axis;
use tracing::debug;

/// Exclusive upper bound for the band of a `height x width` bitmap
///
/// Any band below `min(height, width) / 2` keeps every blended lane and its
/// predecessor inside the image.
pub fn band_limit(height: usize, width: usize) -> usize {
    height.min(width) / 2
}

/// Check that `band` is positive and below half the smaller dimension
///
/// # Errors
///
/// Returns [`crate::TileError::InvalidDimension`] when the band is zero or
/// would reach past an image edge
pub fn validate_band(band: usize, height: usize, width: usize) -> Result<()> {
    let limit = band_limit(height, width);
    if band == 0 {
        return Err(zero_dimension("band", &"blend width must be positive"));
    }
    if band >= limit {
        return Err(invalid_dimension(
            "band",
            band,
            limit,
            &format!("blend width must be smaller than half of the {height}x{width} image"),
        ));
    }
    Ok(())
}

/// Roll the image by half its size and smooth the seams now crossing its center
///
/// After the roll the original edges meet on the middle column and middle
/// row. The columns within `band` of the middle are blended first, then the
/// rows, each lane mixed with its already-blended predecessor.
///
/// # Errors
///
/// Returns an error if the band fails [`validate_band`]
pub fn roll_blend(bitmap: &Bitmap, band: usize) -> Result<Bitmap> {
    let (height, width, _) = bitmap.dim();
    validate_band(band, height, width)?;

    let rgb = bitmap.to_rgb();
    let mut rolled = roll(&rgb.view(), height / 2, width / 2);
    let columns = cascade_seam(&mut rolled, Axis(1), width / 2, band);
    let rows = cascade_seam(&mut rolled, Axis(0), height / 2, band);
    debug!(height, width, band, columns, rows, "Blended rolled seams");

    Ok(Bitmap::from_parts(rolled, ColorMode::Rgb))
}
