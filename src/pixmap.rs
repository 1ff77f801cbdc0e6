//! Owned RGBA Bitmap Surface
//!
//! This module provides `Pixmap`, the in-memory bitmap every widget composes
//! itself into. Widgets render into a `Pixmap`, publish it, and the host
//! (see `world`/`render`) decides how to display it.
//!
//! Pixels are stored RGBA8, row-major. Blitting uses source-over alpha
//! blending and clips at all four edges, so callers never need to pre-clamp
//! offsets.

use sdl2::pixels::Color;

/// An owned RGBA8 bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Pixmap {
    /// Creates a fully transparent pixmap. Zero-sized pixmaps are legal and
    /// act as empty (blitting them is a no-op).
    pub fn new(width: u32, height: u32) -> Self {
        Pixmap {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major. Used for texture uploads.
    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Sets every pixel to `color`, alpha included.
    pub fn fill(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
            chunk[3] = color.a;
        }
    }

    /// Reads the pixel at (x, y), or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some(Color::RGBA(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }

    /// Writes the pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.pixels[i] = color.r;
        self.pixels[i + 1] = color.g;
        self.pixels[i + 2] = color.b;
        self.pixels[i + 3] = color.a;
    }

    /// Paints `src` onto this pixmap with its top-left corner at (x, y).
    ///
    /// Source-over alpha blending; the painted region is clipped against
    /// this pixmap's bounds, so negative offsets and oversized sources are
    /// fine.
    pub fn blit(&mut self, src: &Pixmap, x: i32, y: i32) {
        if src.width == 0 || src.height == 0 || self.width == 0 || self.height == 0 {
            return;
        }
        for sy in 0..src.height {
            let dy = y + sy as i32;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width {
                let dx = x + sx as i32;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let si = ((sy * src.width + sx) * 4) as usize;
                let di = ((dy as u32 * self.width + dx as u32) * 4) as usize;
                blend_over(&mut self.pixels[di..di + 4], &src.pixels[si..si + 4]);
            }
        }
    }

    /// Returns this pixmap rotated 90 degrees clockwise.
    ///
    /// Dimensions swap; the source pixel (x, y) lands at (h - 1 - y, x).
    pub fn rotated_cw(&self) -> Pixmap {
        let mut out = Pixmap::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                let si = ((y * self.width + x) * 4) as usize;
                let dx = self.height - 1 - y;
                let dy = x;
                let di = ((dy * out.width + dx) * 4) as usize;
                out.pixels[di..di + 4].copy_from_slice(&self.pixels[si..si + 4]);
            }
        }
        out
    }
}

/// Source-over blend of one RGBA pixel onto another, integer math.
fn blend_over(dst: &mut [u8], src: &[u8]) {
    let sa = src[3] as u32;
    if sa == 255 {
        dst.copy_from_slice(src);
        return;
    }
    if sa == 0 {
        return;
    }
    let inv = 255 - sa;
    for c in 0..3 {
        dst[c] = ((src[c] as u32 * sa + dst[c] as u32 * inv + 127) / 255) as u8;
    }
    dst[3] = (sa + (dst[3] as u32 * inv + 127) / 255).min(255) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let p = Pixmap::new(3, 2);
        assert_eq!(p.width(), 3);
        assert_eq!(p.height(), 2);
        assert_eq!(p.pixel(0, 0), Some(Color::RGBA(0, 0, 0, 0)));
        assert_eq!(p.pixel(2, 1), Some(Color::RGBA(0, 0, 0, 0)));
        assert_eq!(p.pixel(3, 0), None);
    }

    #[test]
    fn test_fill_sets_every_pixel() {
        let mut p = Pixmap::new(2, 2);
        p.fill(Color::RGBA(10, 20, 30, 255));
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(p.pixel(x, y), Some(Color::RGBA(10, 20, 30, 255)));
            }
        }
    }

    #[test]
    fn test_blit_opaque_and_clipped() {
        let mut dst = Pixmap::new(4, 4);
        dst.fill(Color::RGBA(0, 0, 0, 255));
        let mut src = Pixmap::new(2, 2);
        src.fill(Color::RGBA(255, 0, 0, 255));

        // Partially off the top-left corner: only (0,0) lands.
        dst.blit(&src, -1, -1);
        assert_eq!(dst.pixel(0, 0), Some(Color::RGBA(255, 0, 0, 255)));
        assert_eq!(dst.pixel(1, 0), Some(Color::RGBA(0, 0, 0, 255)));
        assert_eq!(dst.pixel(0, 1), Some(Color::RGBA(0, 0, 0, 255)));

        // Partially off the bottom-right corner.
        dst.blit(&src, 3, 3);
        assert_eq!(dst.pixel(3, 3), Some(Color::RGBA(255, 0, 0, 255)));
        assert_eq!(dst.pixel(2, 2), Some(Color::RGBA(0, 0, 0, 255)));
    }

    #[test]
    fn test_blit_transparent_source_leaves_dst() {
        let mut dst = Pixmap::new(2, 2);
        dst.fill(Color::RGBA(7, 8, 9, 255));
        let src = Pixmap::new(2, 2); // fully transparent
        dst.blit(&src, 0, 0);
        assert_eq!(dst.pixel(1, 1), Some(Color::RGBA(7, 8, 9, 255)));
    }

    #[test]
    fn test_blit_blends_partial_alpha() {
        let mut dst = Pixmap::new(1, 1);
        dst.fill(Color::RGBA(0, 0, 0, 255));
        let mut src = Pixmap::new(1, 1);
        src.fill(Color::RGBA(255, 255, 255, 128));
        dst.blit(&src, 0, 0);
        let px = dst.pixel(0, 0).unwrap();
        // Roughly half-bright gray, still opaque.
        assert!(px.r > 120 && px.r < 136);
        assert_eq!(px.a, 255);
    }

    #[test]
    fn test_rotated_cw_transposes() {
        // 2x1: [A, B] rotated CW becomes 1x2 with A on top.
        let mut p = Pixmap::new(2, 1);
        p.set_pixel(0, 0, Color::RGBA(1, 0, 0, 255)); // A
        p.set_pixel(1, 0, Color::RGBA(2, 0, 0, 255)); // B
        let r = p.rotated_cw();
        assert_eq!(r.width(), 1);
        assert_eq!(r.height(), 2);
        assert_eq!(r.pixel(0, 0), Some(Color::RGBA(1, 0, 0, 255)));
        assert_eq!(r.pixel(0, 1), Some(Color::RGBA(2, 0, 0, 255)));
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let mut p = Pixmap::new(3, 2);
        p.set_pixel(0, 0, Color::RGBA(9, 9, 9, 255));
        p.set_pixel(2, 1, Color::RGBA(4, 4, 4, 200));
        let r = p.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(r, p);
    }

    #[test]
    fn test_zero_sized_blit_is_noop() {
        let mut dst = Pixmap::new(2, 2);
        let src = Pixmap::new(0, 0);
        dst.blit(&src, 0, 0);
        assert_eq!(dst.pixel(0, 0), Some(Color::RGBA(0, 0, 0, 0)));
    }
}
