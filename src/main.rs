//! Widget demo: a score label and an OK button wired together.
//!
//! Clicking the button bumps the score and updates the label through the
//! button's handler. Mouse clicks are fed to the world once per frame; the
//! world hit-tests them against each actor's published image.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use actor_widgets::config::GuiConfig;
use actor_widgets::gui::{Button, ButtonHandler, Label};
use actor_widgets::{render, World};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 360;

/// Click handler that counts clicks and mirrors the count into a label.
struct ScoreKeeper {
    score: u32,
    label: Rc<RefCell<Label>>,
}

impl ButtonHandler for ScoreKeeper {
    fn on_button_clicked(&mut self, _source: &Button) {
        self.score += 1;
        self.label
            .borrow_mut()
            .set_text(&format!("Score: {}", self.score));
    }
}

fn main() -> Result<(), String> {
    println!("Starting widget demo...");

    let config = match GuiConfig::load_from_file("assets/gui.json") {
        Ok(config) => {
            println!("  - Loaded assets/gui.json");
            config
        }
        Err(_) => GuiConfig::default(),
    };

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window("actor-widgets demo", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let mut world = World::new();

    let label = Rc::new(RefCell::new(Label::new("Score: 0", 20)));
    {
        let mut label = label.borrow_mut();
        label.set_foreground(config.foreground_color());
        label.set_background(config.background_color());
    }

    let keeper = Rc::new(RefCell::new(ScoreKeeper {
        score: 0,
        label: label.clone(),
    }));
    let mut button = Button::new_with_handler("OK", config.text_size, keeper);
    button.set_foreground(config.foreground_color());
    button.set_background(config.background_color());
    match config.border_tiles() {
        Ok(tiles) => button.set_border_tiles(tiles),
        Err(e) => eprintln!("Warning: {}, using built-in border tiles", e),
    }
    let button = Rc::new(RefCell::new(button));

    world.add_actor(label, 40, 40);
    world.add_actor(button, 40, 80);
    println!("✓ World ready ({} actors)", world.len());

    let mut event_pump = sdl_context.event_pump()?;
    'running: loop {
        let mut click = None;
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    click = Some((x, y));
                }
                _ => {}
            }
        }

        world.tick(click);

        canvas.set_draw_color(Color::RGB(30, 30, 40));
        canvas.clear();
        render::draw_world(&mut canvas, &texture_creator, &world)?;
        canvas.present();

        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
