//! Mathematical utilities for the blending strategies

/// Linear interpolation weights and sample mixing
pub mod interpolation;
