//! Button Widget
//!
//! A clickable text widget framed nine-patch style: one corner tile rotated
//! into all four corners and one edge tile rotated and repeated along all
//! four sides. Like [`Label`](crate::gui::Label), every state change
//! recomposites the button's bitmap immediately.
//!
//! Click handling is host-driven: the world calls [`Button::tick`] once per
//! frame and tells the button whether a mouse click landed on it; the button
//! then dispatches to its registered [`ButtonHandler`], if any.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use actor_widgets::gui::{Button, ButtonHandler};
//! use actor_widgets::world::TickContext;
//!
//! struct Counter(u32);
//!
//! impl ButtonHandler for Counter {
//!     fn on_button_clicked(&mut self, _source: &Button) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let counter = Rc::new(RefCell::new(Counter(0)));
//! let mut button = Button::new_with_handler("OK", 16, counter.clone());
//! button.tick(&TickContext::new(true));
//! assert_eq!(counter.borrow().0, 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::gui::border::BorderTiles;
use crate::gui::element::ElementBase;
use crate::pixmap::Pixmap;
use crate::text::render_text;
use crate::world::{Actor, TickContext};
use sdl2::pixels::Color;

/// Margin reserved around the text inside the border, split symmetrically.
const TEXT_MARGIN: u32 = 4;

/// Default text size when a button is constructed from a handler alone.
const DEFAULT_TEXT_SIZE: u32 = 32;

/// Callback capability a button dispatches clicks to.
///
/// Client code implements this and registers it via
/// [`Button::set_handler`]; the clicked button passes itself as the source
/// so one handler can serve several buttons.
pub trait ButtonHandler {
    fn on_button_clicked(&mut self, source: &Button);
}

/// Shared, mutable handler slot. The same value can also live in a
/// [`World`](crate::world::World) as an actor.
pub type SharedHandler = Rc<RefCell<dyn ButtonHandler>>;

/// A clickable button that renders itself into an owned bitmap.
pub struct Button {
    base: ElementBase,
    text: String,
    text_size: u32,
    auto_size: bool,
    handler: Option<SharedHandler>,
    tiles: BorderTiles,
}

impl Button {
    /// Creates a button with text but no handler and renders it
    /// immediately.
    pub fn new(text: &str, text_size: u32) -> Self {
        Self::build(text, text_size, None)
    }

    /// Creates a button with a handler, empty text, and the default text
    /// size, and renders it immediately.
    pub fn with_handler(handler: SharedHandler) -> Self {
        Self::build("", DEFAULT_TEXT_SIZE, Some(handler))
    }

    /// Creates a button with text and a handler and renders it immediately.
    pub fn new_with_handler(text: &str, text_size: u32, handler: SharedHandler) -> Self {
        Self::build(text, text_size, Some(handler))
    }

    fn build(text: &str, text_size: u32, handler: Option<SharedHandler>) -> Self {
        let mut button = Button {
            base: ElementBase::new(),
            text: text.to_string(),
            text_size,
            auto_size: true,
            handler,
            tiles: BorderTiles::default(),
        };
        button.redraw();
        button
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

    /// Sets a new text size. Returns `true` if the size changed (a redraw
    /// has already happened by then); 0 or the current size is a no-op.
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

    pub fn handler(&self) -> Option<&SharedHandler> {
        self.handler.as_ref()
    }

    /// Registers the click handler. Handler changes never trigger a redraw;
    /// they affect dispatch only.
    pub fn set_handler(&mut self, handler: SharedHandler) {
        self.handler = Some(handler);
    }

    /// Clears the click handler; future clicks are ignored.
    pub fn remove_handler(&mut self) {
        self.handler = None;
    }

    /// Replaces the border tile pair and redraws.
    pub fn set_border_tiles(&mut self, tiles: BorderTiles) {
        self.tiles = tiles;
        self.redraw();
    }

    pub fn width(&self) -> u32 {
        self.base.width()
    }

    pub fn height(&self) -> u32 {
        self.base.height()
    }

    /// Fixes the button's size and redraws. Only meaningful with auto-size
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

    /// Per-frame hook: dispatches at most one click to the handler.
    ///
    /// A handler cell that is already mutably borrowed is skipped rather
    /// than panicked on; that covers a button misconfigured as its own
    /// handler, or any actor the world is mid-tick on.
    pub fn tick(&mut self, ctx: &TickContext) {
        if !ctx.mouse_clicked() {
            return;
        }
        let Some(handler) = self.handler.clone() else {
            return;
        };
        if let Ok(mut h) = handler.try_borrow_mut() {
            h.on_button_clicked(self);
        }
    }

    /// Recomposites the button's bitmap from its current state and
    /// publishes it.
    ///
    /// Compositing order: background fill, four corners (the corner tile is
    /// rotated 90 degrees clockwise before each successive corner), four
    /// tiled edges (the edge tile likewise rotated per side), centered text.
    pub fn redraw(&mut self) {
        let text_image = render_text(
            &self.text,
            self.text_size,
            self.base.foreground(),
            self.base.background(),
        );

        let corner = &self.tiles.corner;
        let csx = corner.width();
        let csy = corner.height();

        if self.auto_size {
            self.base.set_size(
                text_image.width() + csx * 2 + TEXT_MARGIN,
                text_image.height() + csy * 2 + TEXT_MARGIN,
            );
        }
        let sx = self.base.width() as i32;
        let sy = self.base.height() as i32;

        let mut canvas = Pixmap::new(self.base.width(), self.base.height());
        canvas.fill(self.base.background());

        // Corners, clockwise from top-left, rotating the tile before each
        // successive one so a single asset fits all four.
        let mut corner = self.tiles.corner.clone();
        canvas.blit(&corner, 0, 0);
        corner = corner.rotated_cw();
        canvas.blit(&corner, sx - corner.width() as i32, 0);
        corner = corner.rotated_cw();
        canvas.blit(
            &corner,
            sx - corner.width() as i32,
            sy - corner.height() as i32,
        );
        corner = corner.rotated_cw();
        canvas.blit(&corner, 0, sy - corner.height() as i32);

        // Edges between the corners, one rotation per side. The tiling
        // position advances by the tile's own extent; a unit step would
        // re-stamp the same pixels thousands of times on a wide button.
        let mut side = self.tiles.side.clone();
        tile_horizontal(&mut canvas, &side, csx as i32, sx - csx as i32, 0);
        side = side.rotated_cw();
        tile_vertical(&mut canvas, &side, csy as i32, sy - csy as i32, sx - csx as i32);
        side = side.rotated_cw();
        tile_horizontal(&mut canvas, &side, csx as i32, sx - csx as i32, sy - csy as i32);
        side = side.rotated_cw();
        tile_vertical(&mut canvas, &side, csy as i32, sy - csy as i32, 0);

        let tx = (sx - text_image.width() as i32) / 2;
        let ty = (sy - text_image.height() as i32) / 2;
        canvas.blit(&text_image, tx, ty);

        self.base.publish(canvas);
    }
}

/// Repeats `tile` along a horizontal edge at height `y`, from `start` up to
/// (exclusive) `end`, stepping by the tile's width.
fn tile_horizontal(canvas: &mut Pixmap, tile: &Pixmap, start: i32, end: i32, y: i32) {
    if tile.width() == 0 {
        return;
    }
    let mut x = start;
    while x < end {
        canvas.blit(tile, x, y);
        x += tile.width() as i32;
    }
}

/// Repeats `tile` along a vertical edge at column `x`, from `start` up to
/// (exclusive) `end`, stepping by the tile's height.
fn tile_vertical(canvas: &mut Pixmap, tile: &Pixmap, start: i32, end: i32, x: i32) {
    if tile.height() == 0 {
        return;
    }
    let mut y = start;
    while y < end {
        canvas.blit(tile, x, y);
        y += tile.height() as i32;
    }
}

impl Actor for Button {
    fn tick(&mut self, ctx: &TickContext) {
        Button::tick(self, ctx);
    }

    fn image(&self) -> &Pixmap {
        self.base.image()
    }
}
