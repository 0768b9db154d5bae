//! Owned RGB/RGBA pixel buffers in (height, width, channels) layout

use crate::io::error::{Result, TileError, invalid_dimension, zero_dimension};
use ndarray::{Array3, ArrayView3, Axis, s};

/// Channel layout of a [`Bitmap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Three 8-bit channels
    Rgb,
    /// Three color channels plus alpha
    Rgba,
}

impl ColorMode {
    /// Number of samples per pixel
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Map a channel count back to a mode
    ///
    /// # Errors
    ///
    /// Returns [`TileError::UnsupportedColorMode`] for anything other than 3 or 4 channels
    pub const fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            _ => Err(TileError::UnsupportedColorMode { channels }),
        }
    }
}

/// A decoded image: `height x width x channels` samples of `u8`
///
/// Strategies borrow a bitmap and always hand back a new one, so the
/// decoded input stays untouched for the whole call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pixels: Array3<u8>,
    mode: ColorMode,
}

impl Bitmap {
    /// Wrap a pixel array, validating its shape
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The last axis is not 3 (RGB) or 4 (RGBA) channels
    /// - Height or width is zero
    pub fn from_array(pixels: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = pixels.dim();
        let mode = ColorMode::from_channels(channels)?;
        if height == 0 {
            return Err(zero_dimension("height", &"bitmap must contain at least one row"));
        }
        if width == 0 {
            return Err(zero_dimension("width", &"bitmap must contain at least one column"));
        }
        Ok(Self { pixels, mode })
    }

    /// Fill a new bitmap with a single color
    ///
    /// The channel count is taken from `color`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Bitmap::from_array`]
    pub fn filled(height: usize, width: usize, color: &[u8]) -> Result<Self> {
        let mut pixels = Array3::zeros((height, width, color.len()));
        for (channel, &value) in color.iter().enumerate() {
            pixels.slice_mut(s![.., .., channel]).fill(value);
        }
        Self::from_array(pixels)
    }

    /// Build a bitmap from an `image` RGB buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty
    pub fn from_rgb_image(img: &image::RgbImage) -> Result<Self> {
        Self::from_raw(img.height(), img.width(), 3, img.as_raw().clone())
    }

    /// Build a bitmap from an `image` RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty
    pub fn from_rgba_image(img: &image::RgbaImage) -> Result<Self> {
        Self::from_raw(img.height(), img.width(), 4, img.as_raw().clone())
    }

    fn from_raw(height: u32, width: u32, channels: usize, raw: Vec<u8>) -> Result<Self> {
        let shape = (height as usize, width as usize, channels);
        let pixels = Array3::from_shape_vec(shape, raw).map_err(|e| TileError::InvalidParameter {
            parameter: "pixels",
            value: format!("{}x{}x{channels}", shape.0, shape.1),
            reason: e.to_string(),
        })?;
        Self::from_array(pixels)
    }

    /// Convert into an `image::DynamicImage` for encoding
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions do not fit in `u32`
    pub fn to_dynamic_image(&self) -> Result<image::DynamicImage> {
        let limit = (u32::MAX as usize).saturating_add(1);
        let width = u32::try_from(self.width()).map_err(|e| {
            invalid_dimension("width", self.width(), limit, &format!("too wide to encode: {e}"))
        })?;
        let height = u32::try_from(self.height()).map_err(|e| {
            invalid_dimension("height", self.height(), limit, &format!("too tall to encode: {e}"))
        })?;
        // Logical iteration order is row-major whatever the memory layout
        let raw: Vec<u8> = self.pixels.iter().copied().collect();
        let dynamic = match self.mode {
            ColorMode::Rgb => image::RgbImage::from_raw(width, height, raw)
                .map(image::DynamicImage::ImageRgb8),
            ColorMode::Rgba => image::RgbaImage::from_raw(width, height, raw)
                .map(image::DynamicImage::ImageRgba8),
        };
        dynamic.ok_or(TileError::UnsupportedColorMode {
            channels: self.channels(),
        })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.len_of(Axis(0))
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.len_of(Axis(1))
    }

    /// Samples per pixel
    pub const fn channels(&self) -> usize {
        self.mode.channels()
    }

    /// Channel layout
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Shape as (height, width, channels)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.pixels.dim()
    }

    /// Read-only view of the samples
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    /// Sample at (row, column, channel), if in range
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        self.pixels.get((row, col, channel)).copied()
    }

    /// All channels of one pixel, if in range
    pub fn pixel(&self, row: usize, col: usize) -> Option<Vec<u8>> {
        (row < self.height() && col < self.width())
            .then(|| self.pixels.slice(s![row, col, ..]).to_vec())
    }

    /// Copy into a 3-channel bitmap, dropping alpha when present
    #[must_use]
    pub fn to_rgb(&self) -> Self {
        let pixels = match self.mode {
            ColorMode::Rgb => self.pixels.clone(),
            ColorMode::Rgba => self.pixels.slice(s![.., .., 0..3]).to_owned(),
        };
        Self {
            pixels,
            mode: ColorMode::Rgb,
        }
    }

    /// Copy into a 4-channel bitmap, adding opaque alpha when missing
    #[must_use]
    pub fn to_rgba(&self) -> Self {
        let pixels = match self.mode {
            ColorMode::Rgba => self.pixels.clone(),
            ColorMode::Rgb => {
                let (height, width, _) = self.pixels.dim();
                let mut rgba = Array3::from_elem((height, width, 4), u8::MAX);
                rgba.slice_mut(s![.., .., 0..3]).assign(&self.pixels);
                rgba
            }
        };
        Self {
            pixels,
            mode: ColorMode::Rgba,
        }
    }

    // Strategies build their output arrays themselves and keep channels intact
    pub(crate) const fn from_parts(pixels: Array3<u8>, mode: ColorMode) -> Self {
        Self { pixels, mode }
    }
}
