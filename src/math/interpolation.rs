//! Linear cross-fade weights and 8-bit sample mixing

/// Mix two samples, `alpha = 0` giving `from` and `alpha = 1` giving `to`
///
/// Evaluated in `f64` as `from + alpha * (to - from)`, the same line as
/// `(1 - alpha) * from + alpha * to` but exact when both samples are equal.
/// The result is truncated toward zero on the way back to `u8`.
pub fn lerp_u8(from: u8, to: u8, alpha: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    alpha.mul_add(to - from, from) as u8
}

/// Weight of the wrapped copy for step `step` of a border `border` wide
///
/// Rises linearly from 0 at the first step toward `(border - 1) / border`.
pub fn border_alpha(step: usize, border: usize) -> f64 {
    if border == 0 {
        return 0.0;
    }
    step as f64 / border as f64
}

/// Weight of the current lane at `offset` inside a seam band of half-width `width`
///
/// `0.5 + 0.5 * offset / width`, so the band starts at 0 (all predecessor),
/// crosses 0.5 on the seam itself and approaches 1 at the far side.
pub fn seam_alpha(offset: isize, width: usize) -> f64 {
    if width == 0 {
        return 1.0;
    }
    0.5_f64.mul_add(offset as f64 / width as f64, 0.5)
}
