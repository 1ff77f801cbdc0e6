//! Bitmap Text Rasterization
//!
//! Renders text with a procedural 5x7 bitmap font into an owned [`Pixmap`]
//! instead of drawing straight to a window, so widgets can composite the
//! result before anything touches the screen.
//!
//! Glyphs occupy a 5x7 cell with a 1-column gap (6 columns per character)
//! and one row of headroom. The pixel scale is derived from the requested
//! text size so that the rendered height tracks it: `scale = max(1, size/8)`.

use crate::pixmap::Pixmap;
use sdl2::pixels::Color;

/// Columns per character cell, including the 1-column gap.
pub const CHAR_ADVANCE: u32 = 6;
/// Rows per line, including the 1-row gap below the 7-row glyph.
pub const LINE_HEIGHT: u32 = 8;

/// Renders `text` at `text_size` into a new pixmap.
///
/// The pixmap is filled with `background` and glyph pixels are painted in
/// `foreground`. Width is `text.chars().count() * 6 * scale`, height is
/// `8 * scale`; an empty string yields a zero-width pixmap.
pub fn render_text(text: &str, text_size: u32, foreground: Color, background: Color) -> Pixmap {
    let scale = (text_size / LINE_HEIGHT).max(1);
    let chars: Vec<char> = text.chars().collect();
    let width = chars.len() as u32 * CHAR_ADVANCE * scale;
    let height = LINE_HEIGHT * scale;

    let mut out = Pixmap::new(width, height);
    out.fill(background);

    for (i, &c) in chars.iter().enumerate() {
        let cell_x = i as u32 * CHAR_ADVANCE * scale;
        let pattern = glyph(c);
        for (row, &bits) in pattern.iter().enumerate() {
            for col in 0..5u32 {
                if (bits >> (4 - col)) & 1 == 1 {
                    // One font pixel is a scale x scale block.
                    for py in 0..scale {
                        for px in 0..scale {
                            out.set_pixel(
                                cell_x + col * scale + px,
                                row as u32 * scale + py,
                                foreground,
                            );
                        }
                    }
                }
            }
        }
    }

    out
}

/// 5x7 bitmap pattern for a character (1 = pixel on). Case-insensitive;
/// unknown characters render as a full block.
fn glyph(c: char) -> &'static [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: Color = Color::RGBA(255, 255, 255, 255);
    const BG: Color = Color::RGBA(0, 0, 0, 255);

    #[test]
    fn test_dimensions_follow_formula() {
        let p = render_text("OK", 16, FG, BG);
        // size 16 -> scale 2
        assert_eq!(p.width(), 2 * CHAR_ADVANCE * 2);
        assert_eq!(p.height(), LINE_HEIGHT * 2);
    }

    #[test]
    fn test_small_size_clamps_to_scale_one() {
        let p = render_text("A", 1, FG, BG);
        assert_eq!(p.width(), CHAR_ADVANCE);
        assert_eq!(p.height(), LINE_HEIGHT);
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        let p = render_text("", 16, FG, BG);
        assert_eq!(p.width(), 0);
    }

    #[test]
    fn test_foreground_and_background_pixels() {
        // 'T' at scale 1: the whole top row of the 5-pixel cell is on.
        let p = render_text("T", 8, FG, BG);
        assert_eq!(p.pixel(0, 0), Some(FG));
        assert_eq!(p.pixel(4, 0), Some(FG));
        // The advance-gap column stays background.
        assert_eq!(p.pixel(5, 0), Some(BG));
        // Row 7 is the headroom row.
        assert_eq!(p.pixel(0, 7), Some(BG));
    }

    #[test]
    fn test_space_renders_blank_cell() {
        let p = render_text(" ", 8, FG, BG);
        for y in 0..p.height() {
            for x in 0..p.width() {
                assert_eq!(p.pixel(x, y), Some(BG));
            }
        }
    }
}
