//! Pixel buffers and the geometric operations the strategies build on

/// Validated RGB/RGBA pixel buffers
pub mod bitmap;
/// Flips, rolls, padding and cropping
pub mod geometry;

pub use bitmap::{Bitmap, ColorMode};
