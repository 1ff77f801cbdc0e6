//! Label Widget
//!
//! A static text widget. A label owns its text, text size, and auto-size
//! flag; every mutation that actually changes state recomposites the label's
//! bitmap immediately and publishes it. There is no deferred redraw.
//!
//! # Example
//!
//! ```rust
//! use actor_widgets::gui::Label;
//!
//! let mut label = Label::new("Score: 0", 20);
//! assert_eq!(label.text(), "Score: 0");
//!
//! // Mutators report whether anything changed (and thus redrew).
//! assert!(label.set_text("Score: 1"));
//! assert!(!label.set_text("Score: 1"));
//! ```

use crate::gui::element::ElementBase;
use crate::pixmap::Pixmap;
use crate::text::render_text;
use crate::world::{Actor, TickContext};
use sdl2::pixels::Color;

/// A text label that renders itself into an owned bitmap.
///
/// With auto-size enabled (the default) the label's dimensions always equal
/// its rendered text bitmap's dimensions. With auto-size disabled the text
/// is centered on a fixed-size background canvas.
pub struct Label {
    base: ElementBase,
    text: String,
    text_size: u32,
    auto_size: bool,
}

impl Label {
    /// Creates a label and renders it immediately.
    ///
    /// `text_size` is taken at face value; a size of 0 renders at the
    /// minimum scale (the size mutator guards against 0, construction does
    /// not).
    pub fn new(text: &str, text_size: u32) -> Self {
        let mut label = Label {
            base: ElementBase::new(),
            text: text.to_string(),
            text_size,
            auto_size: true,
        };
        label.redraw();
        label
    }

    pub fn auto_size(&self) -> bool {
        self.auto_size
    }

    /// Sets the auto-size flag. Enabling triggers an immediate redraw;
    /// disabling leaves the current bitmap unchanged until another mutator
    /// fires.
    pub fn set_auto_size(&mut self, auto_size: bool) {
        self.auto_size = auto_size;
        if self.auto_size {
            self.redraw();
        }
    }

    pub fn text_size(&self) -> u32 {
        self.text_size
    }

    /// Sets a new text size.
    ///
    /// Returns `true` if the size changed (a redraw has already happened by
    /// then). A size of 0 or the current size is a no-op returning `false`.
    pub fn set_text_size(&mut self, size: u32) -> bool {
        if size == 0 || size == self.text_size {
            return false;
        }
        self.text_size = size;
        self.redraw();
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets new text. Returns `true` if the text changed (value equality);
    /// a redraw has already happened by then.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text.to_string();
        self.redraw();
        true
    }

    pub fn width(&self) -> u32 {
        self.base.width()
    }

    pub fn height(&self) -> u32 {
        self.base.height()
    }

    /// Fixes the label's size and redraws. Only meaningful with auto-size
    /// disabled; the next auto-sized redraw overwrites it.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.base.set_size(width, height);
        self.redraw();
    }

    pub fn foreground(&self) -> Color {
        self.base.foreground()
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.base.set_foreground(color);
        self.redraw();
    }

    pub fn background(&self) -> Color {
        self.base.background()
    }

    pub fn set_background(&mut self, color: Color) {
        self.base.set_background(color);
        self.redraw();
    }

    /// The currently published bitmap.
    pub fn image(&self) -> &Pixmap {
        self.base.image()
    }

    /// Recomposites the label's bitmap from its current state and publishes
    /// it.
    ///
    /// Empty text is special-cased to a 1x1 fully transparent placeholder
    /// instead of a zero-width text bitmap.
    pub fn redraw(&mut self) {
        let text_image = if self.text.is_empty() {
            Pixmap::new(1, 1)
        } else {
            render_text(
                &self.text,
                self.text_size,
                self.base.foreground(),
                self.base.background(),
            )
        };

        if self.auto_size {
            self.base.set_size(text_image.width(), text_image.height());
        }

        if self.text.is_empty() && self.auto_size {
            // Keep the placeholder transparent; a background fill would
            // leave a visible 1x1 dot.
            self.base.publish(text_image);
            return;
        }

        let mut canvas = Pixmap::new(self.base.width(), self.base.height());
        canvas.fill(self.base.background());
        let x = (self.base.width() as i32 - text_image.width() as i32) / 2;
        let y = (self.base.height() as i32 - text_image.height() as i32) / 2;
        canvas.blit(&text_image, x, y);
        self.base.publish(canvas);
    }
}

impl Actor for Label {
    /// Labels are passive; the per-frame hook does nothing.
    fn tick(&mut self, _ctx: &TickContext) {}

    fn image(&self) -> &Pixmap {
        self.base.image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{CHAR_ADVANCE, LINE_HEIGHT};

    #[test]
    fn test_construction_renders_immediately() {
        let label = Label::new("Score: 0", 20);
        assert_eq!(label.text(), "Score: 0");
        assert_eq!(label.text_size(), 20);
        assert!(label.auto_size());
        assert!(label.image().width() > 0);
    }

    #[test]
    fn test_auto_size_matches_text_bitmap() {
        let label = Label::new("OK", 16);
        // size 16 -> scale 2
        assert_eq!(label.width(), 2 * CHAR_ADVANCE * 2);
        assert_eq!(label.height(), LINE_HEIGHT * 2);
        assert_eq!(label.image().width(), label.width());
        assert_eq!(label.image().height(), label.height());
    }

    #[test]
    fn test_set_text_size_changes_and_redraws() {
        let mut label = Label::new("A", 8);
        let old_width = label.width();
        assert!(label.set_text_size(16));
        assert_eq!(label.text_size(), 16);
        assert_eq!(label.width(), old_width * 2);
    }

    #[test]
    fn test_set_text_size_rejects_zero_and_same() {
        let mut label = Label::new("A", 8);
        assert!(!label.set_text_size(0));
        assert_eq!(label.text_size(), 8);
        assert!(!label.set_text_size(8));
        assert_eq!(label.text_size(), 8);
    }

    #[test]
    fn test_set_text_is_idempotent() {
        let mut label = Label::new("Score: 0", 20);
        assert!(label.set_text("Score: 1"));
        assert_eq!(label.text(), "Score: 1");
        assert!(!label.set_text("Score: 1"));
        assert_eq!(label.text(), "Score: 1");
    }

    #[test]
    fn test_empty_text_publishes_transparent_1x1() {
        let mut label = Label::new("WIDE TEXT", 32);
        assert!(label.set_text(""));
        assert_eq!(label.image().width(), 1);
        assert_eq!(label.image().height(), 1);
        assert_eq!(label.image().pixel(0, 0).unwrap().a, 0);
    }

    #[test]
    fn test_fixed_size_centers_text() {
        let mut label = Label::new("A", 8);
        label.set_auto_size(false);
        label.set_size(20, 20);
        assert_eq!(label.image().width(), 20);
        assert_eq!(label.image().height(), 20);
        // Corner pixel is background fill, not text.
        assert_eq!(label.image().pixel(0, 0), Some(Color::RGB(255, 255, 255)));
    }

    #[test]
    fn test_disabling_auto_size_does_not_redraw() {
        let mut label = Label::new("AB", 8);
        let before = label.image().clone();
        label.set_auto_size(false);
        assert_eq!(*label.image(), before);
    }

    #[test]
    fn test_enabling_auto_size_redraws() {
        let mut label = Label::new("AB", 8);
        label.set_auto_size(false);
        label.set_size(50, 30);
        assert_eq!(label.image().width(), 50);
        label.set_auto_size(true);
        assert_eq!(label.image().width(), 2 * CHAR_ADVANCE);
    }

    #[test]
    fn test_color_setters_redraw() {
        let mut label = Label::new("A", 8);
        label.set_background(Color::RGB(10, 20, 30));
        // Background shows in the advance-gap column.
        assert_eq!(label.image().pixel(5, 0), Some(Color::RGB(10, 20, 30)));
    }
}
