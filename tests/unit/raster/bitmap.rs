//! Tests for bitmap validation and color mode conversion

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use seamtile::{Bitmap, ColorMode, TileError};

    // Tests channel counts other than 3 and 4 are rejected
    // Verified by accepting any channel count
    #[test]
    fn test_unsupported_channel_count() {
        for channels in [1, 2, 5] {
            let result = Bitmap::from_array(Array3::zeros((2, 2, channels)));
            assert!(
                matches!(result, Err(TileError::UnsupportedColorMode { channels: c }) if c == channels),
                "{channels} channels should be rejected"
            );
        }
    }

    // Tests empty bitmaps are rejected as invalid dimensions
    // Verified by removing the zero-extent checks
    #[test]
    fn test_empty_extent_rejected() {
        let no_rows = Bitmap::from_array(Array3::zeros((0, 4, 3)));
        assert!(matches!(
            no_rows,
            Err(TileError::InvalidDimension { parameter: "height", .. })
        ));

        let no_cols = Bitmap::from_array(Array3::zeros((4, 0, 4)));
        assert!(matches!(
            no_cols,
            Err(TileError::InvalidDimension { parameter: "width", .. })
        ));
    }

    // Tests shape accessors and color mode detection
    // Verified by swapping height and width
    #[test]
    fn test_shape_accessors() {
        let bitmap = Bitmap::from_array(Array3::zeros((3, 5, 4))).expect("valid shape");
        assert_eq!(bitmap.height(), 3);
        assert_eq!(bitmap.width(), 5);
        assert_eq!(bitmap.channels(), 4);
        assert_eq!(bitmap.mode(), ColorMode::Rgba);
        assert_eq!(bitmap.dim(), (3, 5, 4));
    }

    // Tests filled bitmaps carry the color on every pixel
    // Verified by filling only the first channel
    #[test]
    fn test_filled() {
        let bitmap = Bitmap::filled(2, 3, &[255, 0, 0]).expect("valid fill");
        assert_eq!(bitmap.mode(), ColorMode::Rgb);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(bitmap.pixel(y, x), Some(vec![255, 0, 0]));
            }
        }
        assert_eq!(bitmap.pixel(2, 0), None);
        assert_eq!(bitmap.get(0, 3, 0), None);
    }

    // Tests RGB to RGBA adds opaque alpha and RGBA to RGB drops it
    // Verified by filling alpha with zero
    #[test]
    fn test_color_mode_conversion() {
        let rgb = Bitmap::filled(2, 2, &[10, 20, 30]).expect("valid fill");
        let rgba = rgb.to_rgba();
        assert_eq!(rgba.mode(), ColorMode::Rgba);
        assert_eq!(rgba.pixel(1, 1), Some(vec![10, 20, 30, 255]));

        let translucent = Bitmap::filled(2, 2, &[40, 50, 60, 7]).expect("valid fill");
        let flattened = translucent.to_rgb();
        assert_eq!(flattened.mode(), ColorMode::Rgb);
        assert_eq!(flattened.pixel(0, 1), Some(vec![40, 50, 60]));

        // Same-mode conversions copy
        assert_eq!(rgb.to_rgb(), rgb);
        assert_eq!(translucent.to_rgba(), translucent);
    }

    // Tests image buffers keep row-major pixel placement
    // Verified by transposing the shape in from_rgba_image
    #[test]
    fn test_image_buffer_conversion() {
        let img = image::RgbaImage::from_fn(3, 2, |x, y| image::Rgba([x as u8, y as u8, 9, 255]));
        let bitmap = Bitmap::from_rgba_image(&img).expect("non-empty buffer");
        assert_eq!(bitmap.dim(), (2, 3, 4));
        assert_eq!(bitmap.pixel(1, 2), Some(vec![2, 1, 9, 255]));

        let back = bitmap.to_dynamic_image().expect("fits in u32").to_rgba8();
        assert_eq!(back, img);
    }

    // Tests an empty image buffer is reported rather than wrapped
    // Verified by skipping validation in from_raw
    #[test]
    fn test_empty_image_buffer() {
        let img = image::RgbImage::new(0, 0);
        assert!(Bitmap::from_rgb_image(&img).is_err());
    }
}
