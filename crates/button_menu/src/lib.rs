//! # Button Menu
//!
//! A frame-driven button widget layer for real-time rendering loops.
//!
//! ## Features
//!
//! - **Per-button state machine**: Inactive/Active/Hovering/Clicking with a
//!   post-release cool-down, one callback per completed click
//! - **Z-ordered input arbitration**: the topmost button under the pointer
//!   claims input and blocks everything beneath it
//! - **Backend-agnostic drawing**: one textured, tinted quad per visible
//!   button, handed to whatever renderer the host provides
//! - **Explicit input**: one pointer snapshot per frame, no device polling
//!
//! ## Quick Start
//!
//! ```rust
//! use button_menu::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! // Renderer adapter: record draw commands instead of painting pixels.
//! struct Recorder(Vec<DrawQuad>);
//!
//! impl MenuRenderBackend for Recorder {
//!     fn draw_quad(&mut self, quad: DrawQuad) {
//!         self.0.push(quad);
//!     }
//! }
//!
//! let clicks = Rc::new(Cell::new(0));
//! let observed = Rc::clone(&clicks);
//!
//! let mut menu = ButtonCollection::new();
//! menu.add(Button::new(
//!     Rect::new(0, 0, 120, 40),
//!     ButtonVisuals::tinted(TextureId(0), StatePalette::default()),
//!     Some(Box::new(move |_: &()| observed.set(observed.get() + 1))),
//!     (),
//! ));
//!
//! // Hover, press, release, then let the click cool-down run out.
//! menu.update(PointerSnapshot::released(60, 20));
//! menu.update(PointerSnapshot::pressed(60, 20));
//! menu.update(PointerSnapshot::released(60, 20));
//! menu.update(PointerSnapshot::released(60, 20));
//! menu.update(PointerSnapshot::released(60, 20));
//! assert_eq!(clicks.get(), 1);
//!
//! let mut recorder = Recorder(Vec::new());
//! menu.draw(&mut recorder);
//! assert_eq!(recorder.0.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod backend;
pub mod config;
pub mod foundation;
pub mod input;
pub mod rendering;
pub mod widgets;

pub use backend::MenuRenderBackend;
pub use config::{ConfigError, MenuConfig};
pub use foundation::math::{Color, Point2i, Rect, Vec2i};
pub use input::{PointerSnapshot, PointerTracker, PrimaryButton};
pub use rendering::{DrawQuad, TextureId};
pub use widgets::{
    Button, ButtonCollection, ButtonState, ButtonVisuals, ClickAction, StatePalette,
    StateTextures, DEFAULT_CLICK_HOLD_FRAMES,
};

/// Common imports for menu users
pub mod prelude {
    pub use crate::backend::MenuRenderBackend;
    pub use crate::config::MenuConfig;
    pub use crate::foundation::math::{Color, Point2i, Rect, Vec2i};
    pub use crate::input::{PointerSnapshot, PointerTracker, PrimaryButton};
    pub use crate::rendering::{DrawQuad, TextureId};
    pub use crate::widgets::{
        Button, ButtonCollection, ButtonState, ButtonVisuals, ClickAction, StatePalette,
        StateTextures,
    };
}
