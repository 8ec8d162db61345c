use anyhow::{ensure, Result};

use crate::Rgba;

const LIGHT: Rgba = Rgba::new(0xff, 0xff, 0xff);
const DARK: Rgba = Rgba::new(0xcc, 0xd5, 0xdb);

/// A square checkerboard tile rendered behind partially transparent
/// colors.
///
/// Pixels are tightly packed RGBA8, row-major, `side * side * 4` bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaSquare {
    side: u32,
    pixels: Vec<u8>,
}

impl AlphaSquare {
    /// Edge length of the tile in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// The raw RGBA8 pixel buffer.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the tile.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.side || y >= self.side {
            return None;
        }
        let i = (y as usize * self.side as usize + x as usize) * 4;
        Some(Rgba::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }
}

/// Generate the checkerboard tile: a white base with `#ccd5db` squares in
/// the top-left and bottom-right quadrants. The tile's side is `2 * size`
/// so it repeats seamlessly.
///
/// A zero `size` cannot produce a drawable tile and is an error.
pub fn create_alpha_square(size: u32) -> Result<AlphaSquare> {
    ensure!(size > 0, "alpha square size must be non-zero");

    let side = size * 2;
    let mut pixels = vec![0u8; side as usize * side as usize * 4];
    for y in 0..side {
        for x in 0..side {
            let quadrant_dark = (x < size) == (y < size);
            let color = if quadrant_dark { DARK } else { LIGHT };
            let i = (y as usize * side as usize + x as usize) * 4;
            pixels[i] = color.r;
            pixels[i + 1] = color.g;
            pixels[i + 2] = color.b;
            pixels[i + 3] = 0xff;
        }
    }

    Ok(AlphaSquare { side, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_an_error() {
        assert!(create_alpha_square(0).is_err());
    }

    #[test]
    fn test_tile_dimensions() {
        let tile = create_alpha_square(4).unwrap();
        assert_eq!(tile.side(), 8);
        assert_eq!(tile.pixels().len(), 8 * 8 * 4);
    }

    #[test]
    fn test_checkerboard_layout() {
        let tile = create_alpha_square(2).unwrap();
        // Dark squares sit top-left and bottom-right.
        assert_eq!(tile.pixel(0, 0), Some(DARK));
        assert_eq!(tile.pixel(1, 1), Some(DARK));
        assert_eq!(tile.pixel(2, 2), Some(DARK));
        assert_eq!(tile.pixel(3, 3), Some(DARK));
        // Light squares sit top-right and bottom-left.
        assert_eq!(tile.pixel(3, 0), Some(LIGHT));
        assert_eq!(tile.pixel(0, 3), Some(LIGHT));
        // Out of bounds.
        assert_eq!(tile.pixel(4, 0), None);
    }

    #[test]
    fn test_fully_opaque() {
        let tile = create_alpha_square(1).unwrap();
        assert!(tile.pixels().chunks(4).all(|px| px[3] == 0xff));
    }
}
