//! GUI Widgets
//!
//! Self-contained visual widgets for an actor world. Each widget owns its
//! state and an [`ElementBase`] with its size, colors, and published bitmap;
//! every mutation that changes state recomposites that bitmap on the spot.
//! The host never asks a widget to repaint — it just displays whatever the
//! widget last published.
//!
//! # Architecture
//!
//! - Widgets compose an [`ElementBase`] rather than inheriting from one.
//! - Rendering is pure pixmap compositing (see [`crate::pixmap`] and
//!   [`crate::text`]); no canvas or window is involved until the host draws.
//! - Buttons receive clicks by being ticked by the world, not by callback
//!   from an event loop; see [`crate::world`].
//!
//! # Available Widgets
//!
//! - [`Label`] - static text
//! - [`Button`] - clickable text with a nine-patch tile border
//!
//! # Example Usage
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use actor_widgets::gui::{Button, ButtonHandler, Label};
//!
//! struct Quitter;
//! impl ButtonHandler for Quitter {
//!     fn on_button_clicked(&mut self, source: &Button) {
//!         println!("{} clicked", source.text());
//!     }
//! }
//!
//! let label = Label::new("Paused", 24);
//! let mut button = Button::new_with_handler("Quit", 16, Rc::new(RefCell::new(Quitter)));
//! assert_eq!(label.text(), "Paused");
//! assert!(button.set_text("Resume"));
//! ```

pub mod border;
pub mod button;
pub mod element;
pub mod label;

pub use border::BorderTiles;
pub use button::{Button, ButtonHandler, SharedHandler};
pub use element::ElementBase;
pub use label::Label;
