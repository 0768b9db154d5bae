//! Quadrant mirror: reflect the top-left quarter into the other three

use crate::raster::bitmap::{Bitmap, ColorMode};
use crate::raster::geometry::mirror_tile;
use ndarray::{Array3, s};

/// Rebuild the image from four reflections of its top-left quadrant
///
/// The quadrant is `h / 2` by `w / 2`. Its horizontal reflection goes to the
/// top right, its vertical reflection to the bottom left and the 180 degree
/// rotation to the bottom right. The result is RGBA and keeps the input
/// size; with an odd height or width the last row or column stays
/// transparent black.
pub fn quadrant_mirror(bitmap: &Bitmap) -> Bitmap {
    let rgba = bitmap.to_rgba();
    let (height, width, channels) = rgba.dim();
    let (half_height, half_width) = (height / 2, width / 2);

    let quadrant = rgba.view().slice_move(s![..half_height, ..half_width, ..]);
    let mirrored = mirror_tile(&quadrant);

    let mut canvas = Array3::zeros((height, width, channels));
    canvas
        .slice_mut(s![..2 * half_height, ..2 * half_width, ..])
        .assign(&mirrored);

    Bitmap::from_parts(canvas, ColorMode::Rgba)
}
