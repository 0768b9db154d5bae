//! Mirror grid: reflect the whole image into a 2x2 grid and re-center

use crate::raster::bitmap::{Bitmap, ColorMode};
use crate::raster::geometry::{crop, mirror_tile};

/// Crop the center of a 2x2 mirror grid built from the full image
///
/// The grid holds the original, its horizontal reflection, its vertical
/// reflection and its 180 degree rotation. The returned RGB window has the
/// input size and starts at (`h / 2`, `w / 2`), so the mirror seams of the
/// grid cross its middle while its own edges meet continuously when tiled.
pub fn mirror_grid(bitmap: &Bitmap) -> Bitmap {
    let rgb = bitmap.to_rgb();
    let (height, width, _) = rgb.dim();

    let grid = mirror_tile(&rgb.view());
    let window = crop(&grid.view(), height / 2, width / 2, height, width);

    Bitmap::from_parts(window, ColorMode::Rgb)
}
