//! Error types shared by the seam strategies and the file layer

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TileError {
    /// A width or image extent cannot be used by the requested operation
    ///
    /// Raised before any pixel is read, so a failed call never touches
    /// out-of-range memory or produces a partial bitmap.
    InvalidDimension {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value that was supplied
        value: usize,
        /// Exclusive upper bound the value had to stay below, `None` when only zero is refused
        limit: Option<usize>,
        /// Explanation of the constraint
        reason: String,
    },

    /// Pixel data whose channel count no strategy can convert
    UnsupportedColorMode {
        /// Number of channels found on the last axis
        channels: usize,
    },

    /// Strategy name that does not match any known variant
    UnknownStrategy {
        /// The name as supplied by the caller
        name: String,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// In-memory bytes could not be decoded as an image
    ImageDecode {
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Failed to encode or save a bitmap
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line or caller parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                parameter,
                value,
                limit,
                reason,
            } => match limit {
                Some(limit) => write!(
                    f,
                    "Invalid dimension '{parameter}' = {value} (must be below {limit}): {reason}"
                ),
                None => write!(
                    f,
                    "Invalid dimension '{parameter}' = {value} (must be positive): {reason}"
                ),
            },
            Self::UnsupportedColorMode { channels } => {
                write!(
                    f,
                    "Unsupported color mode: {channels} channels (expected 3 for RGB or 4 for RGBA)"
                )
            }
            Self::UnknownStrategy { name } => {
                write!(f, "Unknown strategy '{name}'")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageDecode { source } => {
                write!(f, "Failed to decode image data: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::ImageExport { source, .. }
            | Self::ImageDecode { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TileError>;

impl From<image::ImageError> for TileError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode { source: err }
    }
}

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimension error
pub fn invalid_dimension(
    parameter: &'static str,
    value: usize,
    limit: usize,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidDimension {
        parameter,
        value,
        limit: Some(limit),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimension error for a zero extent or width
pub fn zero_dimension(parameter: &'static str, reason: &impl ToString) -> TileError {
    TileError::InvalidDimension {
        parameter,
        value: 0,
        limit: None,
        reason: reason.to_string(),
    }
}
