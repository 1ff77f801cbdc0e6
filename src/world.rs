//! Actor World
//!
//! The minimal host runtime the widgets live in: a `World` owns placed
//! actors, ticks each of them once per frame, answers the per-actor "did
//! the mouse click land on you" question, and composites their published
//! images for display.
//!
//! Actors are shared `Rc<RefCell<..>>` handles so the same object can be
//! placed in the world and, say, registered as a button's click handler.
//! Everything is single-threaded and frame-driven; no actor suspends or
//! spans ticks.

use std::cell::RefCell;
use std::rc::Rc;

use crate::pixmap::Pixmap;

/// Something the world can place, tick, and display.
pub trait Actor {
    /// Called once per frame by the world.
    fn tick(&mut self, ctx: &TickContext);

    /// The actor's currently published bitmap; its dimensions are the
    /// actor's bounds for hit-testing.
    fn image(&self) -> &Pixmap;
}

/// Per-actor, per-frame context handed to [`Actor::tick`].
pub struct TickContext {
    mouse_clicked: bool,
}

impl TickContext {
    pub fn new(mouse_clicked: bool) -> Self {
        TickContext { mouse_clicked }
    }

    /// Whether a mouse click landed inside this actor's bounds this frame.
    pub fn mouse_clicked(&self) -> bool {
        self.mouse_clicked
    }
}

/// Shared actor handle.
pub type SharedActor = Rc<RefCell<dyn Actor>>;

struct Placement {
    actor: SharedActor,
    x: i32,
    y: i32,
}

/// An ordered set of placed actors driven by the host's frame loop.
///
/// Actors are ticked and composited in insertion order; the widgets make no
/// assumption about that order beyond "once per frame".
pub struct World {
    placements: Vec<Placement>,
}

impl World {
    pub fn new() -> Self {
        World {
            placements: Vec::new(),
        }
    }

    /// Places an actor with its top-left corner at (x, y).
    pub fn add_actor(&mut self, actor: SharedActor, x: i32, y: i32) {
        self.placements.push(Placement { actor, x, y });
    }

    /// Removes a placed actor. Returns `true` if it was present.
    pub fn remove_actor(&mut self, actor: &SharedActor) -> bool {
        let before = self.placements.len();
        self.placements
            .retain(|p| !Rc::ptr_eq(&p.actor, actor));
        self.placements.len() != before
    }

    /// Moves a placed actor. Returns `true` if it was present.
    pub fn move_actor(&mut self, actor: &SharedActor, x: i32, y: i32) -> bool {
        for p in &mut self.placements {
            if Rc::ptr_eq(&p.actor, actor) {
                p.x = x;
                p.y = y;
                return true;
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Runs one frame: hit-tests the reported click (if any) against each
    /// actor's current image bounds, then ticks every actor once.
    ///
    /// An actor that is already mutably borrowed elsewhere is skipped for
    /// this frame rather than panicked on.
    pub fn tick(&mut self, mouse_click: Option<(i32, i32)>) {
        for p in &self.placements {
            let clicked = match (mouse_click, p.actor.try_borrow()) {
                (Some((mx, my)), Ok(actor)) => {
                    let img = actor.image();
                    mx >= p.x
                        && my >= p.y
                        && mx < p.x + img.width() as i32
                        && my < p.y + img.height() as i32
                }
                _ => false,
            };
            if let Ok(mut actor) = p.actor.try_borrow_mut() {
                actor.tick(&TickContext::new(clicked));
            }
        }
    }

    /// Blits every actor's published image onto `target` at its placement,
    /// in insertion order.
    pub fn composite(&self, target: &mut Pixmap) {
        for p in &self.placements {
            if let Ok(actor) = p.actor.try_borrow() {
                target.blit(actor.image(), p.x, p.y);
            }
        }
    }

    /// Visits each placed actor with its position. Used by the renderer.
    pub fn for_each_placement<F>(&self, mut f: F)
    where
        F: FnMut(&SharedActor, i32, i32),
    {
        for p in &self.placements {
            f(&p.actor, p.x, p.y);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
