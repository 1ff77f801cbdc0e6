//! Button Border Tiles
//!
//! A button frame is composed nine-patch style from two reusable tiles: one
//! corner tile (rotated 90 degrees per corner) and one edge tile (rotated 90
//! degrees per side). Tiles can come from image assets or from the built-in
//! procedural pair, which keeps headless use and tests asset-free.

use crate::assets;
use crate::pixmap::Pixmap;
use sdl2::pixels::Color;

/// Side length of the procedural default tiles, in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 6;

/// The corner/side tile pair a button composites its frame from.
#[derive(Debug, Clone)]
pub struct BorderTiles {
    pub corner: Pixmap,
    pub side: Pixmap,
}

impl BorderTiles {
    /// Loads the tile pair from two image files (e.g. the bundled
    /// `Button_Corner.png` / `Button_Side.png` assets).
    pub fn load(corner_path: &str, side_path: &str) -> Result<Self, String> {
        Ok(BorderTiles {
            corner: assets::load_pixmap(corner_path)?,
            side: assets::load_pixmap(side_path)?,
        })
    }
}

impl Default for BorderTiles {
    /// Procedural 6x6 tiles: a dark gray frame with a lighter inner bevel.
    fn default() -> Self {
        let dark = Color::RGB(60, 60, 70);
        let light = Color::RGB(150, 150, 165);

        // Corner: oriented for the top-left position. Outer two edges dark,
        // inner corner lighter, the rest transparent.
        let mut corner = Pixmap::new(DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE);
        for i in 0..DEFAULT_TILE_SIZE {
            corner.set_pixel(i, 0, dark);
            corner.set_pixel(0, i, dark);
            corner.set_pixel(i, 1, dark);
            corner.set_pixel(1, i, dark);
        }
        corner.set_pixel(2, 2, light);
        corner.set_pixel(3, 2, light);
        corner.set_pixel(2, 3, light);

        // Side: oriented for the top edge. Two dark rows, one light row.
        let mut side = Pixmap::new(DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE);
        for x in 0..DEFAULT_TILE_SIZE {
            side.set_pixel(x, 0, dark);
            side.set_pixel(x, 1, dark);
            side.set_pixel(x, 2, light);
        }

        BorderTiles { corner, side }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tile_dimensions() {
        let tiles = BorderTiles::default();
        assert_eq!(tiles.corner.width(), DEFAULT_TILE_SIZE);
        assert_eq!(tiles.corner.height(), DEFAULT_TILE_SIZE);
        assert_eq!(tiles.side.width(), DEFAULT_TILE_SIZE);
        assert_eq!(tiles.side.height(), DEFAULT_TILE_SIZE);
    }

    #[test]
    fn test_default_corner_edges_are_opaque() {
        let tiles = BorderTiles::default();
        assert_eq!(tiles.corner.pixel(0, 0).unwrap().a, 255);
        assert_eq!(tiles.corner.pixel(5, 0).unwrap().a, 255);
        assert_eq!(tiles.corner.pixel(0, 5).unwrap().a, 255);
        // Interior away from the bevel stays transparent.
        assert_eq!(tiles.corner.pixel(5, 5).unwrap().a, 0);
    }

    #[test]
    fn test_default_side_top_rows_opaque() {
        let tiles = BorderTiles::default();
        for x in 0..DEFAULT_TILE_SIZE {
            assert_eq!(tiles.side.pixel(x, 0).unwrap().a, 255);
            assert_eq!(tiles.side.pixel(x, 2).unwrap().a, 255);
            assert_eq!(tiles.side.pixel(x, 4).unwrap().a, 0);
        }
    }
}
