//! Shared widget base state
//!
//! Every widget composes an [`ElementBase`]: its size, its foreground and
//! background colors, and the bitmap it most recently published. Widgets own
//! their base exclusively; nothing outside the widget mutates it.

use crate::pixmap::Pixmap;
use sdl2::pixels::Color;

/// Size and color state shared by all widgets, plus the published image.
///
/// This is plain data; the owning widget's setters decide when a change
/// triggers a redraw. There is no deferred redraw anywhere: the published
/// image always reflects the state at the time `redraw` last ran.
#[derive(Debug, Clone)]
pub struct ElementBase {
    width: u32,
    height: u32,
    foreground: Color,
    background: Color,
    image: Pixmap,
}

impl ElementBase {
    /// Black-on-white base with no size; the first redraw establishes both
    /// the size (under auto-size) and the image.
    pub fn new() -> Self {
        ElementBase {
            width: 0,
            height: 0,
            foreground: Color::RGB(0, 0, 0),
            background: Color::RGB(255, 255, 255),
            image: Pixmap::new(0, 0),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// The currently published bitmap.
    pub fn image(&self) -> &Pixmap {
        &self.image
    }

    /// Replaces the published bitmap. Called at the end of every redraw.
    pub fn publish(&mut self, image: Pixmap) {
        self.image = image;
    }
}

impl Default for ElementBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let base = ElementBase::new();
        assert_eq!(base.width(), 0);
        assert_eq!(base.height(), 0);
        assert_eq!(base.foreground(), Color::RGB(0, 0, 0));
        assert_eq!(base.background(), Color::RGB(255, 255, 255));
        assert_eq!(base.image().width(), 0);
    }

    #[test]
    fn test_publish_replaces_image() {
        let mut base = ElementBase::new();
        base.publish(Pixmap::new(5, 3));
        assert_eq!(base.image().width(), 5);
        assert_eq!(base.image().height(), 3);
    }
}
