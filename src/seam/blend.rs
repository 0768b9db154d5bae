//! Lane-wise cross-fades shared by the blending strategies
//!
//! A lane is one full row (`Axis(0)`) or one full column (`Axis(1)`) of a
//! (height, width, channels) array. Blends copy the source lane before
//! writing so the target can be borrowed mutably from the same array.

use crate::math::interpolation::{border_alpha, lerp_u8, seam_alpha};
use ndarray::{Array3, Axis, Zip};

/// Cross-fade lane `extent - border + step` toward its wrapped copy at `extent + step`
///
/// `padded` must already be wrap-padded by at least `border` along `axis`,
/// so the lane at `extent + step` holds the original lane `step`. Lanes
/// outside the array are left alone.
pub fn blend_border_lane(
    padded: &mut Array3<u8>,
    axis: Axis,
    extent: usize,
    border: usize,
    step: usize,
) {
    let Some(target) = (extent + step).checked_sub(border) else {
        return;
    };
    let source = extent + step;
    if source >= padded.len_of(axis) {
        return;
    }

    let alpha = border_alpha(step, border);
    let wrapped = padded.index_axis(axis, source).to_owned();
    let mut lane = padded.index_axis_mut(axis, target);
    Zip::from(&mut lane)
        .and(&wrapped)
        .for_each(|sample, &wrapped| *sample = lerp_u8(*sample, wrapped, alpha));
}

/// Cascading blend of the lanes within `band` of `center` along `axis`
///
/// For each offset `i` in `-band..band`, lane `center + i` becomes
/// `alpha * lane + (1 - alpha) * previous` with `alpha = 0.5 + 0.5 * i / band`.
/// Lanes are visited in ascending order and `previous` is read after it was
/// itself blended, so the smoothing carries across the whole band. Offsets
/// whose lane or predecessor fall outside the array are skipped.
///
/// Returns the number of lanes written.
pub fn cascade_seam(pixels: &mut Array3<u8>, axis: Axis, center: usize, band: usize) -> usize {
    let len = isize::try_from(pixels.len_of(axis)).unwrap_or(isize::MAX);
    let center = isize::try_from(center).unwrap_or(isize::MAX);
    let reach = isize::try_from(band).unwrap_or(isize::MAX);

    // Restrict the offsets to 1 <= center + i < len up front instead of testing each one
    let first = (-reach).max(1 - center);
    let end = reach.min(len - center);

    let mut written = 0;
    for offset in first..end {
        let index = (center + offset) as usize;
        let alpha = seam_alpha(offset, band);
        let previous = pixels.index_axis(axis, index - 1).to_owned();
        let mut lane = pixels.index_axis_mut(axis, index);
        Zip::from(&mut lane)
            .and(&previous)
            .for_each(|sample, &previous| *sample = lerp_u8(previous, *sample, alpha));
        written += 1;
    }
    written
}
