//! SDL2 Presentation
//!
//! Bridges composited [`Pixmap`]s to an SDL2 window canvas. Widgets never
//! touch the canvas themselves; the host draws whatever image each actor
//! has published.

use crate::pixmap::Pixmap;
use crate::world::World;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::pixels::PixelFormatEnum;
use sdl2::video::{Window, WindowContext};

/// Draws a pixmap onto the canvas with its top-left corner at (x, y).
///
/// Uploads the pixels as a streaming RGBA texture with alpha blending
/// enabled. Zero-sized pixmaps are skipped.
pub fn draw_pixmap(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    pixmap: &Pixmap,
    x: i32,
    y: i32,
) -> Result<(), String> {
    let (w, h) = (pixmap.width(), pixmap.height());
    if w == 0 || h == 0 {
        return Ok(());
    }

    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::RGBA32, w, h)
        .map_err(|e| e.to_string())?;
    texture.set_blend_mode(BlendMode::Blend);
    texture
        .update(None, pixmap.bytes(), (w * 4) as usize)
        .map_err(|e| e.to_string())?;

    canvas.copy(&texture, None, Rect::new(x, y, w, h))
}

/// Draws every actor's published image at its world placement, in world
/// order.
pub fn draw_world(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    world: &World,
) -> Result<(), String> {
    let mut result = Ok(());
    world.for_each_placement(|actor, x, y| {
        if result.is_err() {
            return;
        }
        if let Ok(actor) = actor.try_borrow() {
            result = draw_pixmap(canvas, texture_creator, actor.image(), x, y);
        }
    });
    result
}
