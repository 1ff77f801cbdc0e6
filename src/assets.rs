//! Image Asset Loading
//!
//! Loads image files into [`Pixmap`]s through `sdl2::image`. Surfaces are
//! used rather than textures so pixel data stays readable for compositing.

use crate::pixmap::Pixmap;
use sdl2::image::LoadSurface;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::surface::Surface;

/// Loads an image file (PNG, BMP, ...) into a pixmap.
///
/// Fails with the usual "Failed to load {path}" message when the file is
/// missing or not decodable; callers decide whether to fall back.
pub fn load_pixmap(path: &str) -> Result<Pixmap, String> {
    let surface = Surface::from_file(path).map_err(|e| format!("Failed to load {}: {}", path, e))?;
    let converted = surface
        .convert_format(PixelFormatEnum::RGBA32)
        .map_err(|e| format!("Failed to convert {}: {}", path, e))?;

    let width = converted.width();
    let height = converted.height();
    let pitch = converted.pitch() as usize;

    let mut pixmap = Pixmap::new(width, height);
    converted.with_lock(|bytes| {
        for y in 0..height {
            let row = y as usize * pitch;
            for x in 0..width {
                let i = row + x as usize * 4;
                pixmap.set_pixel(
                    x,
                    y,
                    Color::RGBA(bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]),
                );
            }
        }
    });

    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_pixmap("assets/does_not_exist.png").unwrap_err();
        assert!(err.contains("does_not_exist.png"));
    }
}
