//! Button widget - interactive clickable buttons
//!
//! Each button owns a four-state interaction state machine driven by one
//! pointer snapshot per frame. Input arbitration between overlapping
//! buttons lives in [`crate::widgets::collection`].

use crate::backend::MenuRenderBackend;
use crate::foundation::math::{Color, Rect, Vec2i};
use crate::input::PointerSnapshot;
use crate::rendering::{DrawQuad, TextureId};

/// How many frames a button stays visibly pressed after release,
/// unless the owning collection overrides it
pub const DEFAULT_CLICK_HOLD_FRAMES: u32 = 2;

/// Button interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Disabled or hidden; never reacts to the pointer
    Inactive,
    /// Enabled resting state, pointer elsewhere
    Active,
    /// Pointer is over the button with the primary button up
    Hovering,
    /// Press registered; includes the post-release cool-down frames
    Clicking,
}

/// Per-state tint colors for a single-texture button
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatePalette {
    /// Tint while disabled but visible
    pub inactive: Color,
    /// Tint in the resting state
    pub active: Color,
    /// Tint while hovered
    pub hovering: Color,
    /// Tint while clicked
    pub clicking: Color,
}

impl StatePalette {
    /// Build a palette from colors in inactive/active/hovering/clicking order
    pub fn from_array(colors: [Color; 4]) -> Self {
        Self {
            inactive: colors[0],
            active: colors[1],
            hovering: colors[2],
            clicking: colors[3],
        }
    }
}

impl Default for StatePalette {
    fn default() -> Self {
        Self {
            inactive: Color::new(0.2, 0.2, 0.2, 0.5),
            active: Color::new(0.3, 0.3, 0.3, 0.9),
            hovering: Color::new(0.4, 0.4, 0.5, 1.0),
            clicking: Color::new(0.5, 0.5, 0.6, 1.0),
        }
    }
}

/// Per-state textures for a multi-texture button
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StateTextures {
    /// Texture while disabled but visible
    pub inactive: TextureId,
    /// Texture in the resting state
    pub active: TextureId,
    /// Texture while hovered
    pub hovering: TextureId,
    /// Texture while clicked
    pub clicking: TextureId,
}

/// Visual styling of a button, one descriptor per state
///
/// A closed set of variants instead of per-style subtypes; the state
/// machine never inspects which variant is in use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVisuals {
    /// One texture tinted with a per-state color
    Tinted {
        /// Texture drawn in the bounding box
        texture: TextureId,
        /// Tint per state
        palette: StatePalette,
    },
    /// One texture per state, drawn untinted
    Imaged {
        /// Texture per state
        textures: StateTextures,
    },
}

impl ButtonVisuals {
    /// Convenience constructor for the tinted variant
    pub fn tinted(texture: TextureId, palette: StatePalette) -> Self {
        Self::Tinted { texture, palette }
    }

    /// Convenience constructor for the per-state-texture variant
    pub fn imaged(textures: StateTextures) -> Self {
        Self::Imaged { textures }
    }

    /// The texture and tint describing the given state
    fn descriptor(&self, state: ButtonState) -> (TextureId, Color) {
        match self {
            Self::Tinted { texture, palette } => {
                let tint = match state {
                    ButtonState::Inactive => palette.inactive,
                    ButtonState::Active => palette.active,
                    ButtonState::Hovering => palette.hovering,
                    ButtonState::Clicking => palette.clicking,
                };
                (*texture, tint)
            }
            Self::Imaged { textures } => {
                let texture = match state {
                    ButtonState::Inactive => textures.inactive,
                    ButtonState::Active => textures.active,
                    ButtonState::Hovering => textures.hovering,
                    ButtonState::Clicking => textures.clicking,
                };
                (texture, Color::new(1.0, 1.0, 1.0, 1.0))
            }
        }
    }
}

/// Callback run when a click completes, with the button's bound arguments
pub type ClickAction<A> = Box<dyn FnMut(&A)>;

/// An interactive on-screen button
///
/// `A` is the argument payload handed to the click action; it can be
/// rebound at any time via [`set_arguments`](Self::set_arguments) without
/// reconstructing the button.
pub struct Button<A = ()> {
    bounds: Rect,
    state: ButtonState,
    click_timer: u32,
    click_hold_frames: u32,
    enabled: bool,
    visible: bool,
    visuals: ButtonVisuals,
    current_texture: TextureId,
    current_tint: Color,
    action: Option<ClickAction<A>>,
    args: A,
}

impl<A> Button<A> {
    /// Create a button, enabled and visible, in the resting state
    ///
    /// `action` may be `None`, in which case a completed click is a no-op.
    /// A `bounds` with negative size is not validated and will never
    /// hit-test as containing any point.
    pub fn new(
        bounds: Rect,
        visuals: ButtonVisuals,
        action: Option<ClickAction<A>>,
        args: A,
    ) -> Self {
        let state = ButtonState::Active;
        let (current_texture, current_tint) = visuals.descriptor(state);
        Self {
            bounds,
            state,
            click_timer: 0,
            click_hold_frames: DEFAULT_CLICK_HOLD_FRAMES,
            enabled: true,
            visible: true,
            visuals,
            current_texture,
            current_tint,
            action,
            args,
        }
    }

    /// Current interaction state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Bounding box in pre-offset (layer-local) coordinates
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Reposition the button
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Is the button accepting interaction?
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable interaction; takes effect on the next update
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Is the button drawn?
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the button; a hidden button cannot be interacted with
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Rebind the arguments passed to the click action
    ///
    /// Useful when an argument refers to state that has changed since
    /// construction. A countdown already in flight will deliver the new
    /// arguments when it commits.
    pub fn set_arguments(&mut self, args: A) {
        self.args = args;
    }

    /// The texture and tint the button currently displays
    pub fn appearance(&self) -> (TextureId, Color) {
        (self.current_texture, self.current_tint)
    }

    pub(crate) fn set_click_hold_frames(&mut self, frames: u32) {
        self.click_hold_frames = frames;
    }

    /// Advance the state machine by one frame
    ///
    /// `blocked` is true when a higher widget already claimed this frame's
    /// input; `offset` is the owning collection's translation, applied to
    /// the bounding box before containment testing. Returns true when this
    /// button claims the pointer, in which case lower buttons must be
    /// updated with `blocked = true`.
    pub fn update(&mut self, pointer: &PointerSnapshot, blocked: bool, offset: Vec2i) -> bool {
        let mut claims = false;
        let contains = self.bounds.translated(offset).contains(pointer.position);

        if self.state == ButtonState::Clicking && self.click_timer > 0 {
            // Post-release cool-down: the button stays visibly pressed and
            // keeps claiming input until the countdown commits the click.
            self.click_timer -= 1;
            claims = true;

            if self.click_timer == 0 {
                self.state = ButtonState::Active;
                if let Some(action) = self.action.as_mut() {
                    log::debug!("click committed after cool-down");
                    action(&self.args);
                }
            }
        } else if !self.enabled || !self.visible {
            self.state = ButtonState::Inactive;
        } else if blocked {
            // A covered button may not stay hovered or clicked.
            self.state = ButtonState::Active;
        } else if contains && pointer.is_pressed() && self.state == ButtonState::Hovering {
            // A press registers only from a prior hover; a press that
            // enters the box mid-hold never becomes a click.
            self.state = ButtonState::Clicking;
            claims = true;
        } else if self.state == ButtonState::Clicking && pointer.is_released() {
            // Release arms the cool-down; the callback fires when it runs
            // out, not here.
            self.click_timer = self.click_hold_frames;
            claims = true;
        } else if contains && pointer.is_released() {
            self.state = ButtonState::Hovering;
            claims = true;
        } else if !contains {
            self.state = ButtonState::Active;
        }

        self.update_appearance();
        claims
    }

    /// Emit this button's draw command, or nothing when hidden
    pub fn draw<B: MenuRenderBackend>(&self, backend: &mut B, offset: Vec2i) {
        if !self.visible {
            return;
        }

        backend.draw_quad(DrawQuad {
            texture: self.current_texture,
            dest: self.bounds.translated(offset),
            tint: self.current_tint,
        });
    }

    // Runs every update, including while inactive or hidden, so the first
    // visible frame after a toggle already shows the right descriptor.
    fn update_appearance(&mut self) {
        let (texture, tint) = self.visuals.descriptor(self.state);
        self.current_texture = texture;
        self.current_tint = tint;
    }
}
