//! Center roll with a bounds-checked patch blend

use crate::io::error::{Result, zero_dimension};
use crate::raster::bitmap::{Bitmap, ColorMode};
use crate::raster::geometry::roll;
use crate::seam::blend::cascade_seam;
use ndarray::Axis;
use tracing::debug;

/// Roll the image by half its size and blend a wide band around the centered seams
///
/// Same roll and cascading mix as [`crate::seam::roll_blend::roll_blend`],
/// but rows are blended before columns and the band may exceed the image:
/// offsets whose lane or predecessor would fall outside are skipped.
///
/// # Errors
///
/// Returns [`crate::TileError::InvalidDimension`] when `band` is zero
pub fn roll_patch(bitmap: &Bitmap, band: usize) -> Result<Bitmap> {
    let (height, width, _) = bitmap.dim();
    if band == 0 {
        return Err(zero_dimension("band", &"blend width must be positive"));
    }

    let rgb = bitmap.to_rgb();
    let mut rolled = roll(&rgb.view(), height / 2, width / 2);
    let rows = cascade_seam(&mut rolled, Axis(0), height / 2, band);
    let columns = cascade_seam(&mut rolled, Axis(1), width / 2, band);
    debug!(height, width, band, rows, columns, "Blended rolled patch");

    Ok(Bitmap::from_parts(rolled, ColorMode::Rgb))
}
