//! Menu widget definitions
//!
//! [`Button`] owns the per-button interaction state machine;
//! [`ButtonCollection`] arbitrates pointer input across one layer of
//! buttons and batches their update/draw passes.

pub mod button;
pub mod collection;

pub use button::{
    Button, ButtonState, ButtonVisuals, ClickAction, StatePalette, StateTextures,
    DEFAULT_CLICK_HOLD_FRAMES,
};
pub use collection::ButtonCollection;
