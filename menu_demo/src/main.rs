//! Menu demo application
//!
//! Drives a small screen of overlapping buttons with a scripted pointer
//! instead of a real input device, logging draw commands and click
//! outcomes. Run with `RUST_LOG=debug` to watch the per-frame draw batch.

use std::cell::RefCell;
use std::rc::Rc;

use button_menu::prelude::*;

/// Render backend that logs draw commands instead of painting pixels
struct ConsoleBackend;

impl MenuRenderBackend for ConsoleBackend {
    fn draw_quad(&mut self, quad: DrawQuad) {
        log::debug!(
            "draw texture {:?} at {:?} tint {:?}",
            quad.texture,
            quad.dest,
            quad.tint
        );
    }
}

fn labeled_button(
    bounds: Rect,
    texture: u32,
    label: &str,
    journal: &Rc<RefCell<Vec<String>>>,
) -> Button<String> {
    let journal = Rc::clone(journal);
    Button::new(
        bounds,
        ButtonVisuals::tinted(TextureId(texture), StatePalette::default()),
        Some(Box::new(move |label: &String| {
            log::info!("clicked: {label}");
            journal.borrow_mut().push(label.clone());
        })),
        label.to_string(),
    )
}

fn main() {
    button_menu::foundation::logging::init();
    log::info!("Building demo menu screen...");

    let journal = Rc::new(RefCell::new(Vec::new()));

    let mut menu = ButtonCollection::new();
    menu.add(labeled_button(
        Rect::new(20, 20, 160, 40),
        0,
        "new game",
        &journal,
    ));
    menu.add(labeled_button(
        Rect::new(20, 80, 160, 40),
        1,
        "load game",
        &journal,
    ));
    menu.add(labeled_button(
        Rect::new(20, 200, 160, 40),
        2,
        "quit",
        &journal,
    ));
    // Added last, so it sits on top of "quit" and steals its clicks in the
    // overlap region.
    menu.add(labeled_button(
        Rect::new(60, 190, 120, 60),
        3,
        "confirm",
        &journal,
    ));

    // Saved games are gone; show the button greyed out.
    menu[1].set_enabled(false);

    // Scripted pointer: (x, y, primary down). First a clean click on
    // "new game", then a click in the quit/confirm overlap, which only
    // "confirm" may win.
    let script = [
        (60, 30, false),
        (60, 30, true),
        (60, 30, false),
        (60, 30, false),
        (60, 30, false),
        (70, 210, false),
        (70, 210, true),
        (70, 210, false),
        (70, 210, false),
        (70, 210, false),
    ];

    let mut tracker = PointerTracker::new();
    let mut backend = ConsoleBackend;

    for (frame, (x, y, down)) in script.iter().enumerate() {
        tracker.set_position(*x, *y);
        tracker.set_primary(*down);
        if tracker.just_pressed() {
            log::debug!("frame {frame}: pointer pressed at ({x}, {y})");
        }

        menu.update(tracker.snapshot());
        menu.draw(&mut backend);
        tracker.end_frame();
    }

    log::info!("clicks delivered, in order: {:?}", journal.borrow());

    // Tear the screen down to its disabled state before leaving.
    menu.disable_all();
    menu.update(PointerSnapshot::released(0, 0));
    log::info!(
        "after disable_all, button states: {:?}",
        menu.iter().map(Button::state).collect::<Vec<_>>()
    );
}
