//! Pure geometric rearrangements of (height, width, channels) arrays
//!
//! None of these blend or rescale samples; every output value is a copy of
//! some input value. All functions allocate a fresh array.

use ndarray::{Array3, ArrayView3, s};

/// Reflect into a grid twice as large per axis
///
/// Top left is the input, top right its horizontal reflection, bottom left
/// its vertical reflection and bottom right the 180 degree rotation. Every
/// internal seam of the grid is a mirror line.
pub fn mirror_tile(pixels: &ArrayView3<'_, u8>) -> Array3<u8> {
    let (height, width, channels) = pixels.dim();
    let mut grid = Array3::zeros((2 * height, 2 * width, channels));
    grid.slice_mut(s![..height, ..width, ..]).assign(pixels);
    grid.slice_mut(s![..height, width.., ..])
        .assign(&pixels.slice(s![.., ..;-1, ..]));
    grid.slice_mut(s![height.., ..width, ..])
        .assign(&pixels.slice(s![..;-1, .., ..]));
    grid.slice_mut(s![height.., width.., ..])
        .assign(&pixels.slice(s![..;-1, ..;-1, ..]));
    grid
}

/// Circularly shift by `shift_rows` down and `shift_cols` right
///
/// Samples leaving one edge reappear at the opposite edge, so
/// `out[(y + dy) % h, (x + dx) % w] == in[y, x]`.
pub fn roll(pixels: &ArrayView3<'_, u8>, shift_rows: usize, shift_cols: usize) -> Array3<u8> {
    let (height, width, channels) = pixels.dim();
    let mut rolled = Array3::zeros((height, width, channels));
    if height == 0 || width == 0 {
        return rolled;
    }
    let dy = shift_rows % height;
    let dx = shift_cols % width;

    // Four rectangular block copies instead of per-pixel modulo addressing
    for (src_rows, dst_rows) in [(0..height - dy, dy..height), (height - dy..height, 0..dy)] {
        for (src_cols, dst_cols) in [(0..width - dx, dx..width), (width - dx..width, 0..dx)] {
            rolled
                .slice_mut(s![dst_rows.clone(), dst_cols, ..])
                .assign(&pixels.slice(s![src_rows.clone(), src_cols, ..]));
        }
    }
    rolled
}

/// Extend the bottom by `extra_rows` and the right by `extra_cols` using wrap addressing
///
/// `out[y, x] == in[y % h, x % w]` for every position of the larger array.
/// Padding wider than the image repeats it several times.
pub fn wrap_pad(pixels: &ArrayView3<'_, u8>, extra_rows: usize, extra_cols: usize) -> Array3<u8> {
    let (height, width, _) = pixels.dim();
    if height == 0 || width == 0 {
        return pixels.to_owned();
    }
    tile_to(pixels, height + extra_rows, width + extra_cols)
}

/// Copy the window starting at (`top`, `left`) with the given extent
///
/// The window is clipped to the array bounds.
pub fn crop(
    pixels: &ArrayView3<'_, u8>,
    top: usize,
    left: usize,
    height: usize,
    width: usize,
) -> Array3<u8> {
    let (rows, cols, _) = pixels.dim();
    let top = top.min(rows);
    let left = left.min(cols);
    let bottom = top.saturating_add(height).min(rows);
    let right = left.saturating_add(width).min(cols);
    pixels.slice(s![top..bottom, left..right, ..]).to_owned()
}

/// Repeat the array `rows` times vertically and `cols` times horizontally
pub fn tile(pixels: &ArrayView3<'_, u8>, rows: usize, cols: usize) -> Array3<u8> {
    let (height, width, _) = pixels.dim();
    tile_to(pixels, height * rows, width * cols)
}

// Wrap-addressed fill of an arbitrary target extent, one source block at a time
fn tile_to(pixels: &ArrayView3<'_, u8>, out_height: usize, out_width: usize) -> Array3<u8> {
    let (height, width, channels) = pixels.dim();
    let mut out = Array3::zeros((out_height, out_width, channels));
    if height == 0 || width == 0 {
        return out;
    }

    for top in (0..out_height).step_by(height) {
        let block_rows = height.min(out_height - top);
        for left in (0..out_width).step_by(width) {
            let block_cols = width.min(out_width - left);
            out.slice_mut(s![top..top + block_rows, left..left + block_cols, ..])
                .assign(&pixels.slice(s![0..block_rows, 0..block_cols, ..]));
        }
    }
    out
}
