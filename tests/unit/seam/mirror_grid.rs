//! Tests for the mirror grid recenter strategy

#[cfg(test)]
mod tests {
    use crate::gradient;
    use seamtile::ColorMode;
    use seamtile::seam::mirror_grid::mirror_grid;

    // Tests opposite edges are equal so the crop tiles seamlessly
    // Verified by cropping at the canvas origin
    #[test]
    fn test_opposite_edges_match() {
        let output = mirror_grid(&gradient(6, 8, 3));
        let (height, width, _) = output.dim();
        assert_eq!((height, width), (6, 8));
        for y in 0..height {
            assert_eq!(output.pixel(y, 0), output.pixel(y, width - 1), "row {y}");
        }
        for x in 0..width {
            assert_eq!(output.pixel(0, x), output.pixel(height - 1, x), "column {x}");
        }
    }

    // Tests the crop starts at the image center and the far corner mirrors back to it
    // Verified by offsetting the crop by (h/2 + 1, w/2)
    #[test]
    fn test_crop_offset() {
        let input = gradient(6, 8, 3);
        let output = mirror_grid(&input);
        let center = input.pixel(3, 4);
        assert_eq!(output.pixel(0, 0), center);
        assert_eq!(output.pixel(5, 7), center);
        assert_eq!(output.pixel(2, 3), input.pixel(5, 7));
        assert_eq!(output.pixel(3, 4), input.pixel(5, 7));
    }

    // Tests RGBA input is flattened to RGB without changing the extent
    // Verified by keeping the input mode
    #[test]
    fn test_output_is_rgb() {
        let output = mirror_grid(&gradient(5, 3, 4));
        assert_eq!(output.mode(), ColorMode::Rgb);
        assert_eq!(output.dim(), (5, 3, 3));
    }
}
