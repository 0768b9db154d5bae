//! Decoding files and bytes into bitmaps, and encoding bitmaps as PNG

use crate::io::error::{Result, TileError};
use crate::raster::bitmap::Bitmap;
use image::{ColorType, DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// A decoded bitmap together with the color type of its source
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Pixel data, RGBA when the source carried alpha and RGB otherwise
    pub bitmap: Bitmap,
    /// Color type the source was stored in
    pub source_color: ColorType,
}

fn into_bitmap(img: &DynamicImage) -> Result<Decoded> {
    let source_color = img.color();
    let bitmap = if source_color.has_alpha() {
        Bitmap::from_rgba_image(&img.to_rgba8())?
    } else {
        Bitmap::from_rgb_image(&img.to_rgb8())?
    };
    Ok(Decoded {
        bitmap,
        source_color,
    })
}

/// Decode an in-memory PNG or JPEG
///
/// # Errors
///
/// Returns an error if:
/// - The format cannot be guessed or the data is malformed
/// - The decoded image has no pixels
pub fn decode_bitmap(bytes: &[u8]) -> Result<Decoded> {
    let img = image::load_from_memory(bytes).map_err(|e| TileError::ImageDecode { source: e })?;
    into_bitmap(&img)
}

/// Load and decode an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
/// - The decoded image has no pixels
pub fn load_bitmap<P: AsRef<Path>>(path: P) -> Result<Decoded> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| TileError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    into_bitmap(&img)
}

/// Encode a bitmap as PNG bytes
///
/// # Errors
///
/// Returns an error if the bitmap is too large for the encoder
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let img = bitmap.to_dynamic_image()?;
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| TileError::ImageExport {
            path: "<memory>".into(),
            source: e,
        })?;
    Ok(buffer.into_inner())
}

/// Save a bitmap as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_png<P: AsRef<Path>>(bitmap: &Bitmap, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    bitmap
        .to_dynamic_image()?
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| TileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
