//! Actor-based GUI widgets
//!
//! A small widget kit for frame-driven 2D actor worlds: a [`gui::Label`]
//! and a [`gui::Button`] that render themselves into owned bitmaps
//! ([`pixmap::Pixmap`]) and republish that bitmap on every property change.
//! A minimal [`world::World`] host ticks placed actors once per frame,
//! answers per-actor mouse-click hit tests, and hands published images to
//! the SDL2 presentation layer in [`render`].
//!
//! The widgets themselves are pure and headless; only [`render`] and
//! [`assets`] touch SDL2 beyond its `Color` type.

pub mod assets;
pub mod config;
pub mod gui;
pub mod pixmap;
pub mod render;
pub mod text;
pub mod world;

pub use gui::{BorderTiles, Button, ButtonHandler, Label};
pub use pixmap::Pixmap;
pub use world::{Actor, TickContext, World};
