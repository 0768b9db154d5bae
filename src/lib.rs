//! Seamless tile generation from arbitrary raster images
//!
//! A decoded bitmap goes through one of five seam strategies (mirroring,
//! rolling or edge blending) and comes back as a new bitmap whose opposite
//! edges meet without a visible cut when the image is repeated.

/// Input/output operations and error handling
pub mod io;
/// Blend weight and sample mixing helpers
pub mod math;
/// Pixel buffers and geometric operations
pub mod raster;
/// The seam strategies and the transform entry point
pub mod seam;

pub use io::error::{Result, TileError};
pub use raster::bitmap::{Bitmap, ColorMode};
pub use seam::{BlendParams, Strategy, transform};
